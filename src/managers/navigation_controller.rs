//! Navigation Controller for Stark Browser.
//!
//! Turns toolbar actions into calls on the active tab's view and keeps the
//! displayed address field in step with whichever tab is active.

use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use crate::managers::tab_manager::{TabManager, TabManagerTrait};
use crate::types::config::BrowserConfig;
use crate::types::errors::TabError;
use crate::types::tab::TabId;
use crate::view::{PageView, ViewFactory};

/// Turns address-bar text into something a view can load.
///
/// - text containing `.` without an `http` prefix gets `scheme` prepended;
/// - text with no `.` is a search: spaces become `+`, appended to `search_endpoint`;
/// - anything else passes through unchanged.
///
/// This is a heuristic, not validation. Malformed input is returned as-is and
/// left for the view's own error page.
pub fn resolve_input(text: &str, scheme: &str, search_endpoint: &str) -> String {
    let text = text.trim();
    if !text.contains('.') {
        return format!("{}{}", search_endpoint, text.replace(' ', "+"));
    }
    if !text.starts_with("http") {
        return format!("{}{}", scheme, text);
    }
    text.to_string()
}

/// Routes navigation to the active tab and owns the displayed address.
pub struct NavigationController<F: ViewFactory> {
    tabs: TabManager<F::View>,
    factory: F,
    address_field: String,
    home_address: String,
    search_endpoint: String,
    url_scheme: String,
    new_tab_label: String,
}

impl<F: ViewFactory> NavigationController<F> {
    pub fn new(config: &BrowserConfig, factory: F) -> Self {
        Self {
            tabs: TabManager::new(),
            factory,
            address_field: String::new(),
            home_address: config.home_address.clone(),
            search_endpoint: config.search_endpoint.clone(),
            url_scheme: config.url_scheme.clone(),
            new_tab_label: config.new_tab_label.clone(),
        }
    }

    pub fn resolve_input(&self, text: &str) -> String {
        resolve_input(text, &self.url_scheme, &self.search_endpoint)
    }

    /// Text currently shown in the address bar.
    pub fn address_field(&self) -> &str {
        &self.address_field
    }

    pub fn home_address(&self) -> &str {
        &self.home_address
    }

    pub fn tabs(&self) -> &TabManager<F::View> {
        &self.tabs
    }

    pub fn tabs_mut(&mut self) -> &mut TabManager<F::View> {
        &mut self.tabs
    }

    pub fn active_tab_id(&self) -> Option<&TabId> {
        self.tabs.active_tab_id()
    }

    /// Opens a tab at `address` (home if `None`) and makes it active.
    pub fn open_tab(&mut self, address: Option<&str>, label: Option<&str>) -> Result<TabId, TabError> {
        let address = address.unwrap_or(&self.home_address).to_string();
        let label = label.unwrap_or(&self.new_tab_label).to_string();
        let tab_id = TabId::new();
        let view = self.factory.create_view(&tab_id)?;
        let tab_id = self.tabs.open_tab(tab_id, view, &address, &label);
        self.sync_address_field();
        Ok(tab_id)
    }

    /// Closes a tab unless it is the last one, then shows the active tab's address.
    pub fn close_tab(&mut self, tab_id: &TabId) -> Result<(), TabError> {
        self.tabs.close_tab(tab_id)?;
        self.sync_address_field();
        Ok(())
    }

    pub fn close_active_tab(&mut self) {
        if let Some(id) = self.tabs.active_tab_id().cloned() {
            // The active id always refers to a registered tab.
            let _ = self.close_tab(&id);
        }
    }

    pub fn switch_tab(&mut self, tab_id: &TabId) -> Result<(), TabError> {
        self.tabs.switch_tab(tab_id)?;
        self.sync_address_field();
        Ok(())
    }

    /// A view reported a new address. Only the active tab drives the address field.
    pub fn on_address_changed(&mut self, tab_id: &TabId, url: &str) {
        if self.tabs.on_address_changed(tab_id, url) {
            self.address_field = url.to_string();
        }
    }

    /// Resolves address-bar text and loads it in the active tab.
    ///
    /// Returns the resolved URL, or `None` when nothing was navigated.
    pub fn navigate(&mut self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }
        let url = self.resolve_input(text);
        let tab = self.tabs.get_active_tab_mut()?;
        log::debug!("Navigating tab {} to {}", tab.id, url);
        tab.view.navigate(&url);
        Some(url)
    }

    pub fn go_back(&mut self) {
        if let Some(tab) = self.tabs.get_active_tab_mut() {
            tab.view.back();
        }
    }

    pub fn go_forward(&mut self) {
        if let Some(tab) = self.tabs.get_active_tab_mut() {
            tab.view.forward();
        }
    }

    pub fn reload(&mut self) {
        if let Some(tab) = self.tabs.get_active_tab_mut() {
            tab.view.reload();
        }
    }

    pub fn go_home(&mut self) {
        let home = self.home_address.clone();
        if let Some(tab) = self.tabs.get_active_tab_mut() {
            tab.view.navigate(&home);
        }
    }

    /// Replaces the active tab's page with a generated document. The tab keeps its address.
    pub fn show_content(&mut self, html: &str) {
        if let Some(tab) = self.tabs.get_active_tab_mut() {
            tab.view.set_content(html);
        }
    }

    pub fn show_bookmarks(&mut self, bookmarks: &BookmarkManager) {
        self.show_content(&bookmarks.render());
    }

    /// Bookmarks the active tab's current address. Returns true if it was new.
    pub fn bookmark_current(&self, bookmarks: &mut BookmarkManager) -> bool {
        match self.tabs.get_active_tab() {
            Some(tab) => {
                let address = tab.view.current_address();
                !address.is_empty() && bookmarks.add_bookmark(&address)
            }
            None => false,
        }
    }

    fn sync_address_field(&mut self) {
        if let Some(tab) = self.tabs.get_active_tab() {
            self.address_field = tab.address.clone();
        }
    }
}
