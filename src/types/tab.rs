use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque handle identifying an open tab.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(String);

impl TabId {
    /// Generates a fresh random tab id.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TabId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// An open tab. The registry owns the tab and, through it, the page view.
#[derive(Debug)]
pub struct Tab<V> {
    pub id: TabId,
    pub label: String,
    pub address: String,
    pub view: V,
}

impl<V> Tab<V> {
    /// Serializable snapshot of the tab for the browser chrome.
    pub fn info(&self) -> TabInfo {
        TabInfo {
            id: self.id.clone(),
            label: self.label.clone(),
            address: self.address.clone(),
        }
    }
}

/// Chrome-facing description of a tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: TabId,
    pub label: String,
    pub address: String,
}
