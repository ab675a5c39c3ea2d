//! Flat display records. No relations, no persistence: the id only routes the
//! modal and the edit/delete placeholders.

use serde::Serialize;

/// Lifecycle status shown as a colored badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Active,
    Pending,
    Inactive,
    Approved,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Active => "Actif",
            Status::Pending => "En attente",
            Status::Inactive => "Inactif",
            Status::Approved => "Approuvé",
        }
    }

    /// CSS modifier appended to `status-badge`.
    pub fn badge_class(self) -> &'static str {
        match self {
            Status::Active | Status::Approved => "active",
            Status::Pending => "pending",
            Status::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub id: u32,
    pub kind: &'static str,
    pub description: &'static str,
    pub user: &'static str,
    pub date: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: u32,
    pub name: &'static str,
    pub category: &'static str,
    pub status: Status,
    pub budget: &'static str,
    pub date: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: u32,
    pub name: &'static str,
    pub email: &'static str,
    pub role: &'static str,
    pub status: Status,
    pub date: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Testimonial {
    pub id: u32,
    pub author: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub status: Status,
    pub date: &'static str,
}

/// One card of the sustainable development goals (ODD) grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Goal {
    pub number: u8,
    pub title: &'static str,
}

/// Cut `text` to `max_chars` characters and append `...` when it was longer.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_only_cuts_long_text() {
        assert_eq!(excerpt("court", 50), "court");
        let exact = "x".repeat(50);
        assert_eq!(excerpt(&exact, 50), exact);
        let long = "y".repeat(51);
        assert_eq!(excerpt(&long, 50), format!("{}...", "y".repeat(50)));
    }

    #[test]
    fn excerpt_counts_characters_not_bytes() {
        let s = "é".repeat(60);
        let out = excerpt(&s, 50);
        assert_eq!(out.chars().count(), 53);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn badge_classes_follow_status() {
        assert_eq!(Status::Active.badge_class(), "active");
        assert_eq!(Status::Approved.badge_class(), "active");
        assert_eq!(Status::Pending.badge_class(), "pending");
        assert_eq!(Status::Inactive.badge_class(), "inactive");
    }
}
