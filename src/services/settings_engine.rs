// Stark Browser Settings Engine
// Holds the settings panel state for the life of the process: theme and permission toggles.
// Nothing is written to disk.

use crate::types::errors::SettingsError;
use crate::types::settings::{BrowserSettings, ThemeMode};

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn get_settings(&self) -> &BrowserSettings;
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError>;
    fn set_theme(&mut self, mode: ThemeMode);
    fn reset(&mut self);
}

/// In-memory settings engine.
#[derive(Debug, Default)]
pub struct SettingsEngine {
    settings: BrowserSettings,
}

/// Permission checkboxes on the settings page: (settings key, label).
const PERMISSION_FIELDS: &[(&str, &str)] = &[
    ("camera", "Allow camera access"),
    ("microphone", "Allow microphone access"),
    ("location", "Allow location access"),
    ("notifications", "Allow notifications"),
    ("popups", "Allow pop-up windows"),
];

impl SettingsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn permission_value(&self, field: &str) -> bool {
        let p = &self.settings.permissions;
        match field {
            "camera" => p.camera,
            "microphone" => p.microphone,
            "location" => p.location,
            "notifications" => p.notifications,
            "popups" => p.popups,
            _ => false,
        }
    }

    /// Renders the settings page shown inside a tab.
    ///
    /// Controls post `ShellCommand` JSON back over `window.ipc`.
    pub fn render_page(&self, stylesheet: &str) -> String {
        let theme_label = match self.settings.appearance.theme {
            ThemeMode::Dark => "Dark",
            ThemeMode::Light => "Light",
        };

        let mut html = String::from("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><title>Settings</title><style>");
        html.push_str(stylesheet);
        html.push_str(
            "body{font-family:sans-serif;background:var(--window-bg);color:var(--text-color);\
             font-size:var(--font-size);padding:32px 48px}\
             button{border:none;background:var(--control-bg);color:var(--text-color);\
             border-radius:var(--control-radius);padding:6px 12px}\
             label{display:block;margin:8px 0}",
        );
        html.push_str("</style></head><body><h1>Settings</h1><h2>Appearance</h2>");
        html.push_str(&format!(
            "<p>Theme: <span id=\"theme\">{}</span> <button id=\"toggle-theme\">Toggle theme</button></p>",
            theme_label
        ));
        html.push_str("<h2>Permissions</h2>");
        for (field, label) in PERMISSION_FIELDS {
            let checked = if self.permission_value(field) { " checked" } else { "" };
            html.push_str(&format!(
                "<label><input type=\"checkbox\" data-key=\"permissions.{}\"{}> {}</label>",
                field, checked, label
            ));
        }
        html.push_str(
            "<script>\
             function send(m){if(window.ipc)window.ipc.postMessage(JSON.stringify(m))}\
             document.getElementById('toggle-theme').addEventListener('click',function(){\
             send({cmd:'toggle_theme'});\
             var t=document.getElementById('theme');t.textContent=t.textContent==='Dark'?'Light':'Dark';});\
             document.querySelectorAll('input[data-key]').forEach(function(c){\
             c.addEventListener('change',function(){send({cmd:'set_setting',key:c.dataset.key,value:c.checked})});});\
             </script></body></html>",
        );
        html
    }
}

impl SettingsEngineTrait for SettingsEngine {
    fn get_settings(&self) -> &BrowserSettings {
        &self.settings
    }

    /// Updates an individual setting by dot-notation key path.
    ///
    /// The settings are converted to a `serde_json::Value`, the target is
    /// replaced, and the result is deserialized back so a wrongly typed value
    /// is rejected without touching the current settings.
    ///
    /// # Examples
    /// - `"appearance.theme"` with `"Light"`
    /// - `"permissions.camera"` with `true`
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        if key.is_empty() {
            return Err(SettingsError::InvalidKey("Key cannot be empty".to_string()));
        }

        let parts: Vec<&str> = key.split('.').collect();

        let mut json_value = serde_json::to_value(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        {
            let mut current = &mut json_value;
            for (i, part) in parts.iter().enumerate() {
                if i == parts.len() - 1 {
                    match current {
                        serde_json::Value::Object(map) => {
                            if !map.contains_key(*part) {
                                return Err(SettingsError::InvalidKey(format!(
                                    "Key '{}' not found in settings",
                                    key
                                )));
                            }
                            map.insert(part.to_string(), value.clone());
                        }
                        _ => {
                            return Err(SettingsError::InvalidKey(format!(
                                "Cannot navigate to key '{}': intermediate value is not an object",
                                key
                            )));
                        }
                    }
                } else {
                    current = match current.get_mut(*part) {
                        Some(v) => v,
                        None => {
                            return Err(SettingsError::InvalidKey(format!(
                                "Key '{}' not found in settings",
                                key
                            )));
                        }
                    };
                }
            }
        }

        let new_settings: BrowserSettings = serde_json::from_value(json_value).map_err(|e| {
            SettingsError::InvalidValue(format!("Invalid value for key '{}': {}", key, e))
        })?;

        self.settings = new_settings;
        log::debug!("Setting {} updated", key);
        Ok(())
    }

    fn set_theme(&mut self, mode: ThemeMode) {
        self.settings.appearance.theme = mode;
    }

    fn reset(&mut self) {
        self.settings = BrowserSettings::default();
    }
}
