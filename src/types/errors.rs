use thiserror::Error;

// === TabError ===

/// Errors related to tab registry operations.
#[derive(Debug, Error, PartialEq)]
pub enum TabError {
    /// Tab with the given ID was not found.
    #[error("Tab not found: {0}")]
    NotFound(String),
    /// The page view for a new tab could not be created.
    #[error("Failed to create view for tab: {0}")]
    View(#[from] ViewError),
}

// === ViewError ===

/// Errors raised by a page view implementation.
#[derive(Debug, Error, PartialEq)]
pub enum ViewError {
    /// The underlying webview could not be built.
    #[error("View build failed: {0}")]
    Build(String),
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The provided settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided settings value is invalid.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}

// === ConfigError ===

/// Errors related to loading the browser configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The config file is not valid JSON for `BrowserConfig`.
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field holds a value the browser cannot run with.
    #[error("Invalid config value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

// === CommandError ===

/// Errors raised while decoding a chrome message into a shell command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The message was not a recognized command.
    #[error("Malformed command: {0}")]
    Malformed(#[from] serde_json::Error),
}
