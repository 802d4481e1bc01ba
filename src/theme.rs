//! Light/dark theme preference and its application to the page.
//!
//! Reads the preference from a [`PreferenceStore`] and applies a `data-theme`
//! attribute to the `<html>` element. Toggling writes the new value back and
//! briefly enables a body color transition so the switch fades.
//!
//! TRADE-OFFS
//! ==========
//! An unrecognized stored value is treated as unset. External stylesheets only
//! understand `light` and `dark`, so passing anything else through would leave
//! the page unstyled.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use crate::config::PortfolioConfig;
use crate::schedule::{RevertSlot, RevertTicket};

/// Attribute on `<html>` that stylesheets key off.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Body transition applied for the duration of a toggle lasting `ms`.
#[must_use]
pub fn body_transition(ms: u32) -> String {
    let secs = f64::from(ms) / 1000.0;
    format!("background-color {secs}s ease, color {secs}s ease")
}

/// Display theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Only the exact lowercase names are accepted.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Origin-scoped key/value persistence (`localStorage` in the browser).
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

/// Document hooks the theme manager writes to.
pub trait ThemeSurface {
    /// Set the theme attribute on the root element.
    fn apply_theme(&mut self, theme: Theme);
    /// Set (or clear, with `""`) the inline body transition.
    fn set_body_transition(&mut self, value: &str);
}

/// Owns the current theme and keeps store and document in sync.
pub struct ThemeManager<S, T> {
    store: S,
    surface: T,
    storage_key: String,
    transition_ms: u32,
    current: Theme,
    transition: RevertSlot,
}

impl<S: PreferenceStore, T: ThemeSurface> ThemeManager<S, T> {
    /// Load the stored preference and apply it immediately.
    pub fn new(store: S, surface: T, config: &PortfolioConfig) -> Self {
        let storage_key = config.theme_storage_key.clone();
        let initial = match store.load(&storage_key) {
            Some(raw) => Theme::parse(&raw).unwrap_or_else(|| {
                log::warn!("unknown stored theme {raw:?}; using {}", Theme::default());
                Theme::default()
            }),
            None => Theme::default(),
        };
        let mut manager = Self {
            store,
            surface,
            storage_key,
            transition_ms: config.theme_transition_ms,
            current: initial,
            transition: RevertSlot::default(),
        };
        manager.set_theme(initial);
        manager
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Apply and persist `theme`.
    pub fn set_theme(&mut self, theme: Theme) {
        self.surface.apply_theme(theme);
        self.store.save(&self.storage_key, theme.as_str());
        self.current = theme;
        log::debug!("theme set to {theme}");
    }

    /// Switch to the opposite theme with a temporary body transition.
    ///
    /// The returned ticket must be passed to [`Self::clear_transition`] once
    /// [`Self::transition_ms`] has elapsed.
    pub fn toggle_theme(&mut self, now_ms: f64) -> RevertTicket {
        self.set_theme(self.current.toggled());
        self.surface.set_body_transition(&body_transition(self.transition_ms));
        self.transition.arm(now_ms, self.transition_ms)
    }

    /// Remove the toggle transition if `ticket` is still current.
    pub fn clear_transition(&mut self, ticket: RevertTicket) -> bool {
        if !self.transition.fire(ticket) {
            return false;
        }
        self.surface.set_body_transition("");
        true
    }

    #[must_use]
    pub fn transition_ms(&self) -> u32 {
        self.transition_ms
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn surface(&self) -> &T {
        &self.surface
    }
}
