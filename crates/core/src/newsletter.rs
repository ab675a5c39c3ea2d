use std::sync::LazyLock;

use regex::Regex;

use crate::notification::NotificationKind;

pub const SUBSCRIBED_MESSAGE: &str = "Merci pour votre inscription à notre newsletter !";
pub const INVALID_MESSAGE: &str = "Veuillez entrer une adresse email valide.";

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Permissive `something@something.something` check.
pub fn validate(email: &str) -> bool {
    EMAIL.is_match(email)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Subscribed { email: String },
    Invalid,
}

impl Outcome {
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Subscribed { .. } => SUBSCRIBED_MESSAGE,
            Outcome::Invalid => INVALID_MESSAGE,
        }
    }

    pub fn notification_kind(&self) -> NotificationKind {
        match self {
            Outcome::Subscribed { .. } => NotificationKind::Success,
            Outcome::Invalid => NotificationKind::Error,
        }
    }

    /// The email field is cleared only after a successful subscription.
    pub fn clears_field(&self) -> bool {
        matches!(self, Outcome::Subscribed { .. })
    }
}

/// Trim and validate the raw field value. Nothing is sent anywhere.
pub fn submit(raw: &str) -> Outcome {
    let email = raw.trim();
    if validate(email) {
        Outcome::Subscribed {
            email: email.to_string(),
        }
    } else {
        Outcome::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_examples() {
        assert!(validate("a@b.co"));
        assert!(!validate("not-an-email"));
        assert!(!validate("a@b"));
        assert!(!validate("a b@c.d"));
        assert!(!validate(""));
    }

    #[test]
    fn submit_trims_before_validating() {
        assert_eq!(
            submit("  marie@example.com \n"),
            Outcome::Subscribed {
                email: "marie@example.com".into()
            }
        );
        assert_eq!(submit("   "), Outcome::Invalid);
    }

    #[test]
    fn outcomes_map_to_notifications() {
        let ok = submit("a@b.co");
        assert_eq!(ok.notification_kind(), NotificationKind::Success);
        assert!(ok.clears_field());
        let bad = submit("a@b");
        assert_eq!(bad.notification_kind(), NotificationKind::Error);
        assert_eq!(bad.message(), INVALID_MESSAGE);
        assert!(!bad.clears_field());
    }
}
