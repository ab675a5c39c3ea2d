//! One-shot scroll reveal bookkeeping.

/// Selector of the card-like elements animated on first sight.
pub const TARGETS: &str = ".feature-card, .project-card, .odd-card, .testimonial-card, .stat-card";

pub const HIDDEN_OPACITY: &str = "0";
pub const HIDDEN_TRANSFORM: &str = "translateY(30px)";
pub const VISIBLE_OPACITY: &str = "1";
pub const VISIBLE_TRANSFORM: &str = "translateY(0)";
pub const TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

/// Tracks which observed elements have already been revealed.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    /// Feed one intersection report. Returns `true` only on the first time the
    /// element becomes visible; leaving the viewport never hides it again.
    pub fn observe(&mut self, index: usize, intersecting: bool) -> bool {
        let Some(slot) = self.revealed.get_mut(index) else {
            return false;
        };
        if !intersecting || *slot {
            return false;
        }
        *slot = true;
        true
    }

    #[cfg(test)]
    fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    #[cfg(test)]
    fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_at_most_once() {
        let mut t = RevealTracker::new(2);
        assert!(!t.observe(0, false));
        assert!(t.observe(0, true));
        assert!(!t.observe(0, false));
        assert!(t.is_revealed(0));
        assert!(!t.observe(0, true));
        assert_eq!(t.revealed_count(), 1);
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut t = RevealTracker::new(1);
        assert!(!t.observe(5, true));
        assert!(!t.is_revealed(5));
    }
}
