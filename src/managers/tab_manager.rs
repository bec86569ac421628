use crate::types::errors::TabError;
use crate::types::tab::{Tab, TabId, TabInfo};
use crate::view::PageView;

/// Trait defining the tab registry interface.
pub trait TabManagerTrait {
    type View: PageView;

    fn open_tab(&mut self, tab_id: TabId, view: Self::View, address: &str, label: &str) -> TabId;
    fn close_tab(&mut self, tab_id: &TabId) -> Result<(), TabError>;
    fn switch_tab(&mut self, tab_id: &TabId) -> Result<(), TabError>;
    fn get_tab(&self, tab_id: &TabId) -> Option<&Tab<Self::View>>;
    fn get_tab_mut(&mut self, tab_id: &TabId) -> Option<&mut Tab<Self::View>>;
    fn get_all_tabs(&self) -> Vec<TabInfo>;
    fn get_active_tab(&self) -> Option<&Tab<Self::View>>;
    fn get_active_tab_mut(&mut self) -> Option<&mut Tab<Self::View>>;
    fn tab_count(&self) -> usize;
    fn on_address_changed(&mut self, tab_id: &TabId, address: &str) -> bool;
}

/// In-memory registry of open tabs. Owns every tab's page view.
pub struct TabManager<V: PageView> {
    tabs: Vec<Tab<V>>,
    active_tab_id: Option<TabId>,
}

impl<V: PageView> TabManager<V> {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active_tab_id: None,
        }
    }

    fn find_tab_index(&self, tab_id: &TabId) -> Option<usize> {
        self.tabs.iter().position(|t| &t.id == tab_id)
    }

    pub fn active_tab_id(&self) -> Option<&TabId> {
        self.active_tab_id.as_ref()
    }

    /// Every tab's view, in tab order.
    pub fn views_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.tabs.iter_mut().map(|t| &mut t.view)
    }

    fn activate(&mut self, tab_id: TabId) {
        if let Some(previous) = self.active_tab_id.take() {
            if let Some(tab) = self.get_tab_mut(&previous) {
                tab.view.set_visible(false);
            }
        }
        if let Some(tab) = self.get_tab_mut(&tab_id) {
            tab.view.set_visible(true);
        }
        self.active_tab_id = Some(tab_id);
    }
}

impl<V: PageView> Default for TabManager<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: PageView> TabManagerTrait for TabManager<V> {
    type View = V;

    /// Register a new tab, point its view at `address` and make it active.
    ///
    /// The stored address is whatever the view reports after the request,
    /// so a refused navigation leaves the new tab blank.
    fn open_tab(&mut self, tab_id: TabId, mut view: V, address: &str, label: &str) -> TabId {
        view.navigate(address);
        self.tabs.push(Tab {
            id: tab_id.clone(),
            label: label.to_string(),
            address: view.current_address(),
            view,
        });
        self.activate(tab_id.clone());
        log::debug!("Opened tab {} at {}", tab_id, address);
        tab_id
    }

    /// Close a tab and drop its view. Closing the only remaining tab is a no-op.
    ///
    /// If the closed tab was active, the tab that slides into its index
    /// becomes active, or the new rightmost tab when it was the last one.
    fn close_tab(&mut self, tab_id: &TabId) -> Result<(), TabError> {
        let idx = self
            .find_tab_index(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;

        if self.tabs.len() == 1 {
            log::debug!("Refusing to close the last tab {}", tab_id);
            return Ok(());
        }

        let was_active = self.active_tab_id.as_ref() == Some(tab_id);
        self.tabs.remove(idx);
        log::debug!("Closed tab {}", tab_id);

        if was_active {
            self.active_tab_id = None;
            let next = idx.min(self.tabs.len() - 1);
            let next_id = self.tabs[next].id.clone();
            self.activate(next_id);
        }
        Ok(())
    }

    fn switch_tab(&mut self, tab_id: &TabId) -> Result<(), TabError> {
        if self.find_tab_index(tab_id).is_none() {
            return Err(TabError::NotFound(tab_id.to_string()));
        }
        self.activate(tab_id.clone());
        Ok(())
    }

    fn get_tab(&self, tab_id: &TabId) -> Option<&Tab<V>> {
        self.tabs.iter().find(|t| &t.id == tab_id)
    }

    fn get_tab_mut(&mut self, tab_id: &TabId) -> Option<&mut Tab<V>> {
        self.tabs.iter_mut().find(|t| &t.id == tab_id)
    }

    fn get_all_tabs(&self) -> Vec<TabInfo> {
        self.tabs.iter().map(Tab::info).collect()
    }

    fn get_active_tab(&self) -> Option<&Tab<V>> {
        self.active_tab_id.as_ref().and_then(|id| self.get_tab(id))
    }

    fn get_active_tab_mut(&mut self) -> Option<&mut Tab<V>> {
        let id = self.active_tab_id.clone()?;
        self.get_tab_mut(&id)
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Record a view's new address. Returns true when the tab is the active one.
    ///
    /// Notifications for tabs that no longer exist are dropped.
    fn on_address_changed(&mut self, tab_id: &TabId, address: &str) -> bool {
        let Some(tab) = self.get_tab_mut(tab_id) else {
            return false;
        };
        tab.address = address.to_string();
        self.active_tab_id.as_ref() == Some(tab_id)
    }
}
