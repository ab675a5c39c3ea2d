//! Cyclic testimonial carousel state.

/// Index over a fixed, non-empty list of slides.
///
/// `current` is always in `0..len`; every operation wraps instead of clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    len: usize,
}

impl Carousel {
    /// `None` when there is nothing to show.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { current: 0, len })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.len;
        self.current
    }

    pub fn prev(&mut self) -> usize {
        self.current = (self.current + self.len - 1) % self.len;
        self.current
    }

    /// Jump to `index`; negative goes to the last slide, past-the-end to the first.
    pub fn go_to(&mut self, index: isize) -> usize {
        self.current = if index < 0 {
            self.len - 1
        } else if index as usize >= self.len {
            0
        } else {
            index as usize
        };
        self.current
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }

    /// Handle an arrow key. Returns the new index when the key is bound.
    pub fn on_key(&mut self, key: &str) -> Option<usize> {
        match key {
            "ArrowLeft" => Some(self.prev()),
            "ArrowRight" => Some(self.next()),
            _ => None,
        }
    }

    /// Horizontal offset of the slide track, in percent.
    pub fn track_offset_percent(&self) -> i64 {
        -(self.current as i64) * 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(c: &Carousel) -> usize {
        (0..c.len).filter(|&i| c.is_active(i)).count()
    }

    #[test]
    fn empty_carousel_is_rejected() {
        assert!(Carousel::new(0).is_none());
    }

    #[test]
    fn next_and_prev_wrap() {
        let mut c = Carousel::new(3).unwrap();
        assert_eq!(c.prev(), 2);
        assert_eq!(c.next(), 0);
        assert_eq!(c.next(), 1);
        assert_eq!(c.next(), 2);
        assert_eq!(c.next(), 0);
    }

    #[test]
    fn go_to_wraps_out_of_range() {
        let mut c = Carousel::new(4).unwrap();
        assert_eq!(c.go_to(2), 2);
        assert_eq!(c.go_to(-1), 3);
        assert_eq!(c.go_to(-9), 3);
        assert_eq!(c.go_to(4), 0);
        assert_eq!(c.go_to(100), 0);
    }

    #[test]
    fn exactly_one_active_under_any_sequence() {
        for n in 1..=6usize {
            let mut c = Carousel::new(n).unwrap();
            // Deterministic pseudo-random walk over the operations.
            let mut seed = 0x2545_F491u64 ^ n as u64;
            for _ in 0..500 {
                seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
                match (seed >> 33) % 4 {
                    0 => {
                        c.next();
                    }
                    1 => {
                        c.prev();
                    }
                    2 => {
                        let target = ((seed >> 40) % 20) as isize - 10;
                        c.go_to(target);
                    }
                    _ => {
                        c.on_key("ArrowLeft");
                    }
                }
                assert!(c.current() < n);
                assert_eq!(active_count(&c), 1);
            }
        }
    }

    #[test]
    fn arrow_keys_only() {
        let mut c = Carousel::new(2).unwrap();
        assert_eq!(c.on_key("ArrowRight"), Some(1));
        assert_eq!(c.on_key("Enter"), None);
        assert_eq!(c.current(), 1);
        assert_eq!(c.track_offset_percent(), -100);
    }
}
