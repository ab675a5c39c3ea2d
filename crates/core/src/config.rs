//! Read-only site configuration.
//!
//! Pages may embed `<script type="application/json" id="siteConfig">` to tweak the
//! constants below. Every field is optional; anything missing keeps its default.

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Viewport width (px) at or below which the sidebar behaves as a mobile overlay.
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint_px: f64,
    /// Scroll offset (px) past which the public header gets `scrolled`.
    #[serde(default = "default_header_threshold")]
    pub header_scroll_threshold_px: f64,
    /// Pre-offset (px) subtracted from each section top for link highlighting.
    #[serde(default = "default_section_offset")]
    pub section_offset_px: f64,
    #[serde(default = "default_notification_display_ms")]
    pub notification_display_ms: u32,
    #[serde(default = "default_notification_exit_ms")]
    pub notification_exit_ms: u32,
    /// Characters of testimonial content shown in the back-office table.
    #[serde(default = "default_excerpt_chars")]
    pub testimonial_excerpt_chars: usize,
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f64,
    #[serde(default = "default_reveal_root_margin")]
    pub reveal_root_margin: String,
    #[serde(default = "default_logout_url")]
    pub logout_url: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_mobile_breakpoint() -> f64 {
    768.0
}

fn default_header_threshold() -> f64 {
    100.0
}

fn default_section_offset() -> f64 {
    100.0
}

fn default_notification_display_ms() -> u32 {
    3000
}

fn default_notification_exit_ms() -> u32 {
    300
}

fn default_excerpt_chars() -> usize {
    50
}

fn default_reveal_threshold() -> f64 {
    0.1
}

fn default_reveal_root_margin() -> String {
    "0px 0px -50px 0px".to_string()
}

fn default_logout_url() -> String {
    "../front-office/index.html".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: default_mobile_breakpoint(),
            header_scroll_threshold_px: default_header_threshold(),
            section_offset_px: default_section_offset(),
            notification_display_ms: default_notification_display_ms(),
            notification_exit_ms: default_notification_exit_ms(),
            testimonial_excerpt_chars: default_excerpt_chars(),
            reveal_threshold: default_reveal_threshold(),
            reveal_root_margin: default_reveal_root_margin(),
            logout_url: default_logout_url(),
            log_level: default_log_level(),
        }
    }
}

impl SiteConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    pub fn is_mobile_width(&self, width: f64) -> bool {
        width <= self.mobile_breakpoint_px
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = SiteConfig::from_json_str(r#"{ "mobileBreakpointPx": 1024 }"#).unwrap();
        assert_eq!(cfg.mobile_breakpoint_px, 1024.0);
        assert_eq!(cfg.notification_display_ms, 3000);
        assert_eq!(cfg.logout_url, "../front-office/index.html");
    }

    #[test]
    fn empty_is_default_and_invalid_is_an_error() {
        assert_eq!(SiteConfig::from_json_str("  ").unwrap(), SiteConfig::default());
        assert!(matches!(
            SiteConfig::from_json_str("{ nope"),
            Err(crate::Error::Config(_))
        ));
    }

    #[test]
    fn breakpoint_is_inclusive() {
        let cfg = SiteConfig::default();
        assert!(cfg.is_mobile_width(768.0));
        assert!(!cfg.is_mobile_width(769.0));
    }

    #[test]
    fn log_level_parses_or_defaults() {
        let mut cfg = SiteConfig::default();
        assert_eq!(cfg.log_level(), log::Level::Info);
        cfg.log_level = "debug".into();
        assert_eq!(cfg.log_level(), log::Level::Debug);
        cfg.log_level = "loud".into();
        assert_eq!(cfg.log_level(), log::Level::Info);
    }
}
