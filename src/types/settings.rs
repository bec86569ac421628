use serde::{Deserialize, Serialize};

/// Top-level browser settings container. Held in memory only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BrowserSettings {
    pub appearance: AppearanceSettings,
    pub permissions: PermissionSettings,
}

/// Appearance and visual settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppearanceSettings {
    pub theme: ThemeMode,
}

/// Theme mode selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

/// Site permission checkboxes shown in the settings panel.
///
/// These are recorded but not enforced on any page view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PermissionSettings {
    pub camera: bool,
    pub microphone: bool,
    pub location: bool,
    pub notifications: bool,
    pub popups: bool,
}
