use serde::{Deserialize, Serialize};

/// A saved bookmark. Identity is the exact URL string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bookmark {
    pub url: String,
}

impl Bookmark {
    pub fn new(url: &str) -> Self {
        Self { url: url.to_string() }
    }
}
