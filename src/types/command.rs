use serde::{Deserialize, Serialize};

use crate::types::errors::CommandError;
use crate::types::settings::{BrowserSettings, ThemeMode};
use crate::types::tab::{TabId, TabInfo};

/// Toolbar and chrome actions, as sent over IPC: `{"cmd": "navigate", "text": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum ShellCommand {
    UiReady,
    Back,
    Forward,
    Reload,
    Home,
    Navigate { text: String },
    /// Opens a tab at the home address, or at `url` taken verbatim. Page
    /// new-window requests arrive here with absolute URLs.
    NewTab {
        #[serde(default)]
        url: Option<String>,
    },
    CloseTab { id: TabId },
    CloseActiveTab,
    SwitchTab { id: TabId },
    AddBookmark,
    ShowBookmarks,
    OpenSettings,
    ToggleTheme,
    GetSettings,
    SetSetting { key: String, value: serde_json::Value },
}

impl ShellCommand {
    /// Decodes an IPC message body.
    pub fn from_json(message: &str) -> Result<Self, CommandError> {
        Ok(serde_json::from_str(message)?)
    }

    /// Commands a generated settings page inside a tab may send.
    pub fn allowed_from_page(&self) -> bool {
        matches!(
            self,
            ShellCommand::GetSettings | ShellCommand::SetSetting { .. } | ShellCommand::ToggleTheme
        )
    }
}

/// Notifications raised by page views, delivered on the event thread.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellEvent {
    AddressChanged { tab: TabId, url: String },
}

/// Chrome state after a command or event has been applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChromeState {
    pub address: String,
    pub tabs: Vec<TabInfo>,
    pub active_id: Option<TabId>,
    pub theme: ThemeMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<BrowserSettings>,
}
