//! App Core for Stark Browser.
//!
//! Central struct holding the navigation controller, bookmark store, request
//! filter and settings/theme state, and dispatching chrome commands to them.
//! Everything here runs on the single UI event thread; only the request
//! filter is shared with view callbacks.

use std::sync::Arc;

use crate::managers::bookmark_manager::BookmarkManager;
use crate::managers::navigation_controller::NavigationController;
use crate::managers::tab_manager::TabManagerTrait;
use crate::services::request_filter::{DomainBlocklist, RequestFilter};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::theme_engine::{ThemeEngine, ThemeEngineTrait};
use crate::types::command::{ChromeState, ShellCommand, ShellEvent};
use crate::types::config::BrowserConfig;
use crate::types::errors::TabError;
use crate::types::tab::TabId;
use crate::view::ViewFactory;

/// Central application struct holding all managers and services.
pub struct BrowserShell<F: ViewFactory> {
    pub config: BrowserConfig,
    pub navigation: NavigationController<F>,
    pub bookmarks: BookmarkManager,
    pub request_filter: Arc<RequestFilter>,
    pub settings_engine: SettingsEngine,
    pub theme_engine: ThemeEngine,
}

impl<F: ViewFactory> BrowserShell<F> {
    pub fn new(config: BrowserConfig, factory: F) -> Self {
        let request_filter = Arc::new(Self::build_filter(&config));
        Self::with_filter(config, factory, request_filter)
    }

    /// Creates a shell around a filter that view callbacks already hold.
    pub fn with_filter(config: BrowserConfig, factory: F, request_filter: Arc<RequestFilter>) -> Self {
        let navigation = NavigationController::new(&config, factory);
        let settings_engine = SettingsEngine::new();
        let theme_engine = ThemeEngine::new(settings_engine.get_settings().appearance.theme);

        Self {
            config,
            navigation,
            bookmarks: BookmarkManager::new(),
            request_filter,
            settings_engine,
            theme_engine,
        }
    }

    /// Builds the process-wide request filter from the configured blocklist.
    pub fn build_filter(config: &BrowserConfig) -> RequestFilter {
        RequestFilter::new(DomainBlocklist::new(config.blocked_domains.iter().cloned()))
    }

    /// Opens the first tab at the home address.
    pub fn startup(&mut self) -> Result<TabId, TabError> {
        log::info!(
            "Starting {} with {} blocked domains",
            self.config.window_title,
            self.config.blocked_domains.len()
        );
        self.navigation.open_tab(None, None)
    }

    /// Applies one chrome command and returns the resulting chrome state.
    ///
    /// Commands that target a missing tab, or that need an active tab when
    /// there is none, are dropped.
    pub fn handle_command(&mut self, command: ShellCommand) -> ChromeState {
        let mut include_settings = false;

        match command {
            ShellCommand::UiReady => {}
            ShellCommand::Back => self.navigation.go_back(),
            ShellCommand::Forward => self.navigation.go_forward(),
            ShellCommand::Reload => self.navigation.reload(),
            ShellCommand::Home => self.navigation.go_home(),
            ShellCommand::Navigate { text } => {
                let _ = self.navigation.navigate(&text);
            }
            ShellCommand::NewTab { url } => {
                if let Err(e) = self.navigation.open_tab(url.as_deref(), None) {
                    log::error!("Could not open tab: {}", e);
                }
            }
            ShellCommand::CloseTab { id } => {
                if let Err(e) = self.navigation.close_tab(&id) {
                    log::debug!("Ignoring close: {}", e);
                }
            }
            ShellCommand::CloseActiveTab => self.navigation.close_active_tab(),
            ShellCommand::SwitchTab { id } => {
                if let Err(e) = self.navigation.switch_tab(&id) {
                    log::debug!("Ignoring switch: {}", e);
                }
            }
            ShellCommand::AddBookmark => {
                self.navigation.bookmark_current(&mut self.bookmarks);
            }
            ShellCommand::ShowBookmarks => self.navigation.show_bookmarks(&self.bookmarks),
            ShellCommand::OpenSettings => {
                let page = self.settings_engine.render_page(&self.theme_engine.stylesheet());
                self.navigation.show_content(&page);
                include_settings = true;
            }
            ShellCommand::ToggleTheme => {
                let mode = self.theme_engine.toggle();
                self.settings_engine.set_theme(mode);
                include_settings = true;
            }
            ShellCommand::GetSettings => include_settings = true,
            ShellCommand::SetSetting { key, value } => {
                match self.settings_engine.set_value(&key, value) {
                    Ok(()) => {
                        let mode = self.settings_engine.get_settings().appearance.theme;
                        self.theme_engine.set_theme(mode);
                    }
                    Err(e) => log::warn!("Rejected setting: {}", e),
                }
                include_settings = true;
            }
        }

        let mut state = self.chrome_state();
        if include_settings {
            state.settings = Some(self.settings_engine.get_settings().clone());
        }
        state
    }

    /// Applies a notification raised by a page view.
    pub fn handle_event(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::AddressChanged { tab, url } => {
                self.navigation.on_address_changed(&tab, &url);
            }
        }
    }

    /// Snapshot of what the chrome should display.
    pub fn chrome_state(&self) -> ChromeState {
        ChromeState {
            address: self.navigation.address_field().to_string(),
            tabs: self.navigation.tabs().get_all_tabs(),
            active_id: self.navigation.active_tab_id().cloned(),
            theme: self.theme_engine.get_theme(),
            settings: None,
        }
    }
}
