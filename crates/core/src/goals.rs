//! Sustainable development goals (ODD) grid behaviour.

use crate::dataset::goal;

/// Keys that activate a focused goal card.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

pub fn card_aria_label(number: u8, title: &str) -> String {
    format!("ODD {number} : {title}")
}

/// Detail hook for a goal card. There is no detail view yet; this only logs.
pub fn show_goal_details(number: u8) {
    match goal(number) {
        Some(g) => log::info!("Détails ODD {}: {}", g.number, g.title),
        None => log::debug!("no goal numbered {number}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_space_activate() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key("a"));
    }

    #[test]
    fn aria_label_names_the_goal() {
        assert_eq!(card_aria_label(4, "Éducation de qualité"), "ODD 4 : Éducation de qualité");
    }
}
