//! Unit tests for the in-memory SettingsEngine.

use serde_json::json;
use stark_browser::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use stark_browser::services::theme_engine::{ThemeEngine, ThemeEngineTrait};
use stark_browser::types::errors::SettingsError;
use stark_browser::types::settings::{BrowserSettings, ThemeMode};

#[test]
fn test_defaults() {
    let engine = SettingsEngine::new();
    let settings = engine.get_settings();
    assert_eq!(settings, &BrowserSettings::default());
    assert_eq!(settings.appearance.theme, ThemeMode::Dark);
    assert!(!settings.permissions.camera);
}

#[test]
fn test_set_value_bool() {
    let mut engine = SettingsEngine::new();
    engine.set_value("permissions.camera", json!(true)).unwrap();
    assert!(engine.get_settings().permissions.camera);
}

#[test]
fn test_set_value_theme() {
    let mut engine = SettingsEngine::new();
    engine.set_value("appearance.theme", json!("Light")).unwrap();
    assert_eq!(engine.get_settings().appearance.theme, ThemeMode::Light);
}

#[test]
fn test_set_value_empty_key() {
    let mut engine = SettingsEngine::new();
    assert!(matches!(
        engine.set_value("", json!(true)),
        Err(SettingsError::InvalidKey(_))
    ));
}

#[test]
fn test_set_value_unknown_key() {
    let mut engine = SettingsEngine::new();
    assert!(matches!(
        engine.set_value("permissions.teleport", json!(true)),
        Err(SettingsError::InvalidKey(_))
    ));
    assert!(matches!(
        engine.set_value("nothing.here", json!(true)),
        Err(SettingsError::InvalidKey(_))
    ));
}

#[test]
fn test_set_value_through_scalar_is_rejected() {
    let mut engine = SettingsEngine::new();
    assert!(matches!(
        engine.set_value("permissions.camera.deep", json!(true)),
        Err(SettingsError::InvalidKey(_))
    ));
}

#[test]
fn test_set_value_wrong_type_leaves_settings_untouched() {
    let mut engine = SettingsEngine::new();
    let result = engine.set_value("permissions.camera", json!("yes"));
    assert!(matches!(result, Err(SettingsError::InvalidValue(_))));
    assert_eq!(engine.get_settings(), &BrowserSettings::default());

    let result = engine.set_value("appearance.theme", json!("Sepia"));
    assert!(matches!(result, Err(SettingsError::InvalidValue(_))));
}

#[test]
fn test_reset() {
    let mut engine = SettingsEngine::new();
    engine.set_value("permissions.popups", json!(true)).unwrap();
    engine.set_theme(ThemeMode::Light);
    engine.reset();
    assert_eq!(engine.get_settings(), &BrowserSettings::default());
}

#[test]
fn test_render_page_reflects_state() {
    let mut engine = SettingsEngine::new();
    engine.set_value("permissions.location", json!(true)).unwrap();
    let page = engine.render_page(&ThemeEngine::default().stylesheet());
    assert!(page.contains("data-key=\"permissions.location\" checked"));
    assert!(page.contains("data-key=\"permissions.camera\">"));
    assert!(page.contains("<span id=\"theme\">Dark</span>"));
    assert!(page.contains("--window-bg:#121212"));
}
