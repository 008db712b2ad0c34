//! Markup contract and timing knobs.
//!
//! Every field has a default matching the theme's templates, so a page only
//! needs to ship the keys it wants to override.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Full behavior-layer configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// CSS selectors each component binds to.
    pub selectors: Selectors,
    /// Delays, intervals and thresholds.
    pub timings: Timings,
}

impl ThemeConfig {
    /// Parse a (possibly partial) JSON override. Unknown keys are ignored.
    pub fn from_json(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}

/// Selectors of the markup the components attach to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    /// Dark-mode toggle button.
    pub dark_toggle: String,
    /// Read-mode toggle button.
    pub read_toggle: String,
    /// Back-to-top button.
    pub scroll_to_top: String,
    /// Hamburger button on narrow viewports.
    pub mobile_toggle: String,
    /// Navigation panel the hamburger opens.
    pub nav: String,
    /// Button opening the search modal.
    pub search_toggle: String,
    /// Pre-rendered search modal, if the template ships one.
    pub search_modal: String,
    /// Code elements that receive a copy button.
    pub code_blocks: String,
    /// Images with a deferred source.
    pub lazy_images: String,
    /// In-page anchor links.
    pub anchors: String,
    /// Full-page loading overlay.
    pub page_loader: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            dark_toggle: ".darkmode-toggle".into(),
            read_toggle: ".readmode-toggle".into(),
            scroll_to_top: ".scroll-to-top".into(),
            mobile_toggle: ".mobile-menu-toggle".into(),
            nav: ".nav".into(),
            search_toggle: ".search-toggle".into(),
            search_modal: ".search-modal".into(),
            code_blocks: "pre code".into(),
            lazy_images: "img[data-src]".into(),
            anchors: "a[href^=\"#\"]".into(),
            page_loader: ".page-loader".into(),
        }
    }
}

/// Timing constants, all in milliseconds except the scroll threshold (px).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Scroll offset above which the back-to-top button shows.
    pub scroll_threshold_px: f64,
    /// Minimum spacing between scroll handler runs.
    pub scroll_throttle_ms: u32,
    /// Quiet period before a search runs.
    pub search_debounce_ms: u32,
    /// Shortest trimmed query that triggers a search.
    pub search_min_chars: usize,
    /// How long copy success/failure feedback stays visible.
    pub copy_feedback_ms: u32,
    /// Delay after `load` before the loader starts fading.
    pub loader_fade_delay_ms: u32,
    /// Fade duration before the loader is removed from layout.
    pub loader_hide_delay_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            scroll_threshold_px: 300.0,
            scroll_throttle_ms: 100,
            search_debounce_ms: 300,
            search_min_chars: 2,
            copy_feedback_ms: 2000,
            loader_fade_delay_ms: 500,
            loader_hide_delay_ms: 300,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_defaults() {
        let config = ThemeConfig::from_json("  ").unwrap();
        assert_eq!(config, ThemeConfig::default());
        assert_eq!(config.selectors.dark_toggle, ".darkmode-toggle");
        assert_eq!(config.timings.scroll_threshold_px, 300.0);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = ThemeConfig::from_json(
            r##"{"selectors":{"nav":"#site-nav"},"timings":{"search_debounce_ms":150},"extra":1}"##,
        )
        .unwrap();
        assert_eq!(config.selectors.nav, "#site-nav");
        assert_eq!(config.selectors.mobile_toggle, ".mobile-menu-toggle");
        assert_eq!(config.timings.search_debounce_ms, 150);
        assert_eq!(config.timings.copy_feedback_ms, 2000);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = ThemeConfig::from_json("{selectors:").unwrap_err();
        assert!(matches!(err, crate::ThemeError::Config(_)));
    }
}
