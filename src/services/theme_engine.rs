//! Theme Engine: dark/light palettes and the CSS variables used by the browser chrome.

use std::collections::HashMap;

use crate::types::settings::ThemeMode;

/// Trait defining the theme engine interface.
pub trait ThemeEngineTrait {
    fn set_theme(&mut self, mode: ThemeMode);
    fn get_theme(&self) -> ThemeMode;
    /// Flips between dark and light and returns the new mode.
    fn toggle(&mut self) -> ThemeMode;
    fn get_css_variables(&self) -> HashMap<String, String>;
    /// `:root { ... }` block with every variable, sorted by name.
    fn stylesheet(&self) -> String;
}

/// Dark chrome colors.
struct DarkPalette;
impl DarkPalette {
    const WINDOW_BG: &'static str = "#121212";
    const TOOLBAR_BG: &'static str = "#1E1E1E";
    const CONTROL_BG: &'static str = "#2C2C2C";
    const CONTROL_HOVER: &'static str = "#3C3C3C";
    const TEXT: &'static str = "#E0E0E0";
    const BORDER: &'static str = "#444444";
}

/// Light chrome colors.
struct LightPalette;
impl LightPalette {
    const WINDOW_BG: &'static str = "#FFFFFF";
    const TOOLBAR_BG: &'static str = "#F3F3F3";
    const CONTROL_BG: &'static str = "#E4E4E4";
    const CONTROL_HOVER: &'static str = "#D6D6D6";
    const TEXT: &'static str = "#1E1E1E";
    const BORDER: &'static str = "#C8C8C8";
}

/// The theme engine implementation.
pub struct ThemeEngine {
    current_theme: ThemeMode,
}

impl ThemeEngine {
    pub fn new(mode: ThemeMode) -> Self {
        Self { current_theme: mode }
    }

    fn build_variables(
        window_bg: &str,
        toolbar_bg: &str,
        control_bg: &str,
        control_hover: &str,
        text: &str,
        border: &str,
    ) -> HashMap<String, String> {
        let mut vars = HashMap::new();
        vars.insert("--window-bg".into(), window_bg.into());
        vars.insert("--toolbar-bg".into(), toolbar_bg.into());
        vars.insert("--control-bg".into(), control_bg.into());
        vars.insert("--control-hover".into(), control_hover.into());
        vars.insert("--text-color".into(), text.into());
        vars.insert("--border-color".into(), border.into());
        vars.insert("--control-radius".into(), "4px".into());
        vars.insert("--input-radius".into(), "8px".into());
        vars.insert("--font-size".into(), "14px".into());
        vars
    }
}

impl Default for ThemeEngine {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

impl ThemeEngineTrait for ThemeEngine {
    fn set_theme(&mut self, mode: ThemeMode) {
        self.current_theme = mode;
    }

    fn get_theme(&self) -> ThemeMode {
        self.current_theme
    }

    fn toggle(&mut self) -> ThemeMode {
        self.current_theme = self.current_theme.toggled();
        self.current_theme
    }

    fn get_css_variables(&self) -> HashMap<String, String> {
        match self.current_theme {
            ThemeMode::Dark => Self::build_variables(
                DarkPalette::WINDOW_BG,
                DarkPalette::TOOLBAR_BG,
                DarkPalette::CONTROL_BG,
                DarkPalette::CONTROL_HOVER,
                DarkPalette::TEXT,
                DarkPalette::BORDER,
            ),
            ThemeMode::Light => Self::build_variables(
                LightPalette::WINDOW_BG,
                LightPalette::TOOLBAR_BG,
                LightPalette::CONTROL_BG,
                LightPalette::CONTROL_HOVER,
                LightPalette::TEXT,
                LightPalette::BORDER,
            ),
        }
    }

    fn stylesheet(&self) -> String {
        let vars = self.get_css_variables();
        let mut names: Vec<&String> = vars.keys().collect();
        names.sort();
        let mut css = String::from(":root{");
        for name in names {
            css.push_str(&format!("{}:{};", name, vars[name]));
        }
        css.push('}');
        css
    }
}
