//! Floating, self-dismissing messages for the public site.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn class(self) -> &'static str {
        match self {
            NotificationKind::Success => "notification notification-success",
            NotificationKind::Error => "notification notification-error",
        }
    }

    fn background(self) -> &'static str {
        match self {
            NotificationKind::Success => "#16a34a",
            NotificationKind::Error => "#dc2626",
        }
    }
}

/// Style applied once the display time is over; removal follows after the exit delay.
pub const EXIT_STYLE: &str = "slideOut 0.3s ease forwards";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Inline style so the element floats even without site CSS for it.
    pub fn inline_style(&self) -> String {
        format!(
            "position: fixed; top: 100px; right: 20px; background: {}; color: white; \
             padding: 1rem 1.5rem; border-radius: 0.5rem; \
             box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); z-index: 10000; \
             animation: slideIn 0.3s ease;",
            self.kind.background()
        )
    }
}

/// Millisecond offsets of the two deferred steps of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub exit_at_ms: u32,
    pub remove_at_ms: u32,
}

impl Schedule {
    pub fn new(display_ms: u32, exit_ms: u32) -> Self {
        Self {
            exit_at_ms: display_ms,
            remove_at_ms: display_ms.saturating_add(exit_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_and_colors_depend_on_kind() {
        let ok = Notification::new("ok", NotificationKind::Success);
        let err = Notification::new("ko", NotificationKind::Error);
        assert_eq!(ok.kind.class(), "notification notification-success");
        assert_eq!(err.kind.class(), "notification notification-error");
        assert!(ok.inline_style().contains("#16a34a"));
        assert!(err.inline_style().contains("#dc2626"));
    }

    #[test]
    fn removal_follows_exit() {
        let s = Schedule::new(3000, 300);
        assert_eq!(s.exit_at_ms, 3000);
        assert_eq!(s.remove_at_ms, 3300);
        assert_eq!(Schedule::new(u32::MAX, 5).remove_at_ms, u32::MAX);
    }
}
