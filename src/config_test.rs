use super::*;

#[test]
fn default_matches_stock_page_constants() {
    let config = PortfolioConfig::default();
    assert_eq!(config.theme_storage_key, "theme");
    assert_eq!(config.theme_transition_ms, 300);
    assert!((config.nav_breakpoint_px - 768.0).abs() < f64::EPSILON);
    assert_eq!(config.feedback_window_ms, 3000);
    assert!((config.reveal_threshold - 0.1).abs() < f64::EPSILON);
    assert_eq!(config.reveal_root_margin, "0px 0px -50px 0px");
    assert_eq!(config.reveal_class, "animate-in");
    assert_eq!(config.font_url, DEFAULT_FONT_URL);
    assert_eq!(config.icon_boot_delay_ms, 100);
}

#[test]
fn from_json_overrides_only_given_fields() {
    let config = PortfolioConfig::from_json(r#"{"nav_breakpoint_px": 1024, "reveal_class": "shown"}"#)
        .expect("valid config");
    assert!((config.nav_breakpoint_px - 1024.0).abs() < f64::EPSILON);
    assert_eq!(config.reveal_class, "shown");
    assert_eq!(config.feedback_window_ms, 3000);
    assert_eq!(config.theme_storage_key, "theme");
}

#[test]
fn from_json_empty_object_is_default() {
    let config = PortfolioConfig::from_json("{}").expect("valid config");
    assert_eq!(config, PortfolioConfig::default());
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = PortfolioConfig::from_json("{not json").expect_err("malformed");
    assert!(matches!(err, UiError::Config(_)));
    assert!(err.to_string().starts_with("invalid portfolio config"));
}

#[test]
fn from_json_rejects_wrong_field_types() {
    assert!(PortfolioConfig::from_json(r#"{"feedback_window_ms": "soon"}"#).is_err());
}

#[test]
fn from_json_or_default_falls_back_on_missing_blank_and_bad_input() {
    assert_eq!(PortfolioConfig::from_json_or_default(None), PortfolioConfig::default());
    assert_eq!(PortfolioConfig::from_json_or_default(Some("   ")), PortfolioConfig::default());
    assert_eq!(PortfolioConfig::from_json_or_default(Some("[1, 2")), PortfolioConfig::default());
}

#[test]
fn from_json_or_default_applies_valid_override() {
    let config = PortfolioConfig::from_json_or_default(Some(r#"{"theme_storage_key": "site-theme"}"#));
    assert_eq!(config.theme_storage_key, "site-theme");
}
