//! Page-level tunables for the controllers.
//!
//! DESIGN
//! ======
//! Every field has a default matching the stock portfolio markup, so an empty
//! page needs no config at all. A page may override any subset through an
//! inline `<script type="application/json" id="portfolio-config">` block.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::UiError;

/// Element id of the optional inline JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

/// Font preloaded by the page loader.
pub const DEFAULT_FONT_URL: &str =
    "https://fonts.gstatic.com/s/inter/v12/UcCO3FwrK3iLTeHuS_fvQtMwCp50KnMw2boKoduKmMEVuLyfAZ9hiA.woff2";

/// Controller settings, deserialized with per-field defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    /// `localStorage` key holding the theme preference.
    pub theme_storage_key: String,
    /// How long the body color transition stays applied after a toggle.
    pub theme_transition_ms: u32,
    /// Viewport width above which the mobile menu is force-closed.
    pub nav_breakpoint_px: f64,
    /// How long submit feedback stays on the button.
    pub feedback_window_ms: u32,
    /// Intersection ratio that counts as visible.
    pub reveal_threshold: f64,
    /// Observer root margin.
    pub reveal_root_margin: String,
    /// Class added to revealed elements.
    pub reveal_class: String,
    /// Font URL injected as a preload hint.
    pub font_url: String,
    /// Delay before the one-off icon render at startup.
    pub icon_boot_delay_ms: u32,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: "theme".to_owned(),
            theme_transition_ms: 300,
            nav_breakpoint_px: 768.0,
            feedback_window_ms: 3000,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_owned(),
            reveal_class: "animate-in".to_owned(),
            font_url: DEFAULT_FONT_URL.to_owned(),
            icon_boot_delay_ms: 100,
        }
    }
}

impl PortfolioConfig {
    /// Parse a config override. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] when `raw` is not a JSON object of the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse an optional override, logging and falling back to defaults on
    /// bad input.
    #[must_use]
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring portfolio config: {e}");
                Self::default()
            }
        }
    }
}
