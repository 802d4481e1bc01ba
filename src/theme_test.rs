use std::collections::HashMap;

use super::*;

#[derive(Default)]
struct MemoryStore {
    values: HashMap<String, String>,
    writes: Vec<String>,
}

impl MemoryStore {
    fn with(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_owned(), value.to_owned());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
        self.writes.push(value.to_owned());
    }
}

#[derive(Default)]
struct RecordingSurface {
    attribute: Option<Theme>,
    transition: String,
}

impl ThemeSurface for RecordingSurface {
    fn apply_theme(&mut self, theme: Theme) {
        self.attribute = Some(theme);
    }

    fn set_body_transition(&mut self, value: &str) {
        value.clone_into(&mut self.transition);
    }
}

fn manager(store: MemoryStore) -> ThemeManager<MemoryStore, RecordingSurface> {
    ThemeManager::new(store, RecordingSurface::default(), &PortfolioConfig::default())
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn theme_parse_accepts_exact_names_only() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn theme_toggled_is_an_involution() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_ne!(theme.toggled(), theme);
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn theme_display_matches_attribute_value() {
    assert_eq!(Theme::Dark.to_string(), "dark");
    assert_eq!(Theme::Light.to_string(), Theme::Light.as_str());
}

#[test]
fn body_transition_default_is_three_tenths_of_a_second() {
    assert_eq!(body_transition(300), "background-color 0.3s ease, color 0.3s ease");
}

#[test]
fn body_transition_scales_with_window() {
    assert_eq!(body_transition(1000), "background-color 1s ease, color 1s ease");
    assert_eq!(body_transition(250), "background-color 0.25s ease, color 0.25s ease");
}

// =============================================================
// ThemeManager
// =============================================================

#[test]
fn new_without_stored_value_applies_and_persists_light() {
    let m = manager(MemoryStore::default());
    assert_eq!(m.current(), Theme::Light);
    assert_eq!(m.surface().attribute, Some(Theme::Light));
    assert_eq!(m.store().load("theme").as_deref(), Some("light"));
}

#[test]
fn new_restores_stored_dark_theme() {
    let m = manager(MemoryStore::with("theme", "dark"));
    assert_eq!(m.current(), Theme::Dark);
    assert_eq!(m.surface().attribute, Some(Theme::Dark));
}

#[test]
fn new_with_unknown_stored_value_falls_back_to_light() {
    let m = manager(MemoryStore::with("theme", "sepia"));
    assert_eq!(m.current(), Theme::Light);
    assert_eq!(m.store().load("theme").as_deref(), Some("light"));
}

#[test]
fn new_honors_configured_storage_key() {
    let config = PortfolioConfig { theme_storage_key: "site-theme".to_owned(), ..PortfolioConfig::default() };
    let m = ThemeManager::new(MemoryStore::with("site-theme", "dark"), RecordingSurface::default(), &config);
    assert_eq!(m.current(), Theme::Dark);
    assert_eq!(m.store().load("theme"), None);
}

#[test]
fn set_theme_is_idempotent() {
    let mut m = manager(MemoryStore::default());
    m.set_theme(Theme::Dark);
    m.set_theme(Theme::Dark);
    assert_eq!(m.current(), Theme::Dark);
    assert_eq!(m.surface().attribute, Some(Theme::Dark));
    assert_eq!(m.store().load("theme").as_deref(), Some("dark"));
}

#[test]
fn toggle_twice_returns_to_original_theme() {
    let mut m = manager(MemoryStore::with("theme", "dark"));
    m.toggle_theme(0.0);
    m.toggle_theme(10.0);
    assert_eq!(m.current(), Theme::Dark);
    assert_eq!(m.surface().attribute, Some(Theme::Dark));
}

#[test]
fn persisted_value_tracks_last_applied_theme() {
    let mut m = manager(MemoryStore::default());
    for i in 0..5 {
        m.toggle_theme(f64::from(i));
    }
    m.set_theme(Theme::Light);
    m.toggle_theme(100.0);
    assert_eq!(m.store().writes.last().map(String::as_str), Some(m.current().as_str()));
    assert_eq!(m.store().load("theme").as_deref(), Some("dark"));
}

#[test]
fn toggle_applies_transition_until_cleared() {
    let mut m = manager(MemoryStore::default());
    let ticket = m.toggle_theme(0.0);
    assert_eq!(m.surface().transition, body_transition(300));
    assert!(m.clear_transition(ticket));
    assert_eq!(m.surface().transition, "");
}

#[test]
fn stale_transition_ticket_does_not_clear_newer_toggle() {
    let mut m = manager(MemoryStore::default());
    let first = m.toggle_theme(0.0);
    let second = m.toggle_theme(100.0);
    assert!(!m.clear_transition(first));
    assert_eq!(m.surface().transition, body_transition(300));
    assert!(m.clear_transition(second));
    assert_eq!(m.surface().transition, "");
}

#[test]
fn transition_window_comes_from_config() {
    let m = manager(MemoryStore::default());
    assert_eq!(m.transition_ms(), 300);
}

#[test]
fn configured_transition_window_drives_body_transition() {
    let config = PortfolioConfig { theme_transition_ms: 500, ..PortfolioConfig::default() };
    let mut m = ThemeManager::new(MemoryStore::default(), RecordingSurface::default(), &config);
    m.toggle_theme(0.0);
    assert_eq!(m.surface().transition, "background-color 0.5s ease, color 0.5s ease");
    assert_eq!(m.transition_ms(), 500);
}
