//! Startup configuration for the browser shell.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::errors::ConfigError;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV_VAR: &str = "STARK_BROWSER_CONFIG";

/// Ad-serving domains blocked out of the box.
pub const DEFAULT_BLOCKED_DOMAINS: &[&str] = &[
    "doubleclick.net",
    "adservice.google.com",
    "googlesyndication.com",
    "ads.pubmatic.com",
    "amazon-adsystem.com",
    "adroll.com",
    "taboola.com",
];

/// Values fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    pub home_address: String,
    /// Query endpoint; the escaped search text is appended verbatim.
    pub search_endpoint: String,
    /// Prefix added to bare host input such as `example.com`.
    pub url_scheme: String,
    pub blocked_domains: Vec<String>,
    pub new_tab_label: String,
    pub window_title: String,
    pub window_width: f64,
    pub window_height: f64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            home_address: "https://www.google.com".to_string(),
            search_endpoint: "https://www.google.com/search?q=".to_string(),
            url_scheme: "https://".to_string(),
            blocked_domains: DEFAULT_BLOCKED_DOMAINS.iter().map(|d| d.to_string()).collect(),
            new_tab_label: "New Tab".to_string(),
            window_title: "Stark Internet Browser".to_string(),
            window_width: 1024.0,
            window_height: 768.0,
        }
    }
}

impl BrowserConfig {
    /// Parses a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: BrowserConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Loads the file named by `STARK_BROWSER_CONFIG`, or defaults if unset.
    ///
    /// A broken config file is logged and replaced by the defaults.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::from_file(Path::new(&path)) {
            Ok(config) => {
                log::info!("Loaded config from {}", Path::new(&path).display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring config {}: {}", Path::new(&path).display(), e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.home_address.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "home_address",
                reason: "must not be empty".to_string(),
            });
        }
        if self.search_endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "search_endpoint",
                reason: "must not be empty".to_string(),
            });
        }
        if self.blocked_domains.iter().any(|d| d.is_empty()) {
            // An empty entry is a substring of every URL.
            return Err(ConfigError::Invalid {
                field: "blocked_domains",
                reason: "entries must not be empty".to_string(),
            });
        }
        if self.window_width <= 0.0 || self.window_height <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "window_width/window_height",
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}
