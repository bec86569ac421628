//! Headless page view with its own history stack.
//!
//! Backs the console build and the test-suite. Navigations complete
//! immediately; the resulting address changes are queued on a channel and
//! applied when the driver pumps events, the same way GUI callbacks reach
//! the event loop. Every outgoing navigation passes the shared request
//! filter first; blocked ones never load.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

use crate::app::BrowserShell;
use crate::services::request_filter::{RequestFilter, RequestFilterTrait};
use crate::types::command::{ChromeState, ShellCommand, ShellEvent};
use crate::types::config::BrowserConfig;
use crate::types::errors::ViewError;
use crate::types::tab::TabId;
use crate::view::{PageView, ViewFactory};

/// In-memory page view.
#[derive(Debug)]
pub struct HeadlessView {
    tab_id: TabId,
    history: Vec<String>,
    position: usize,
    content: Option<String>,
    reloads: usize,
    visible: bool,
    events: Sender<ShellEvent>,
    filter: Arc<RequestFilter>,
}

impl HeadlessView {
    pub fn new(tab_id: TabId, events: Sender<ShellEvent>, filter: Arc<RequestFilter>) -> Self {
        Self {
            tab_id,
            history: Vec::new(),
            position: 0,
            content: None,
            reloads: 0,
            visible: true,
            events,
            filter,
        }
    }

    /// Generated document currently shown instead of the page, if any.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn reload_count(&self) -> usize {
        self.reloads
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Simulates a page-initiated navigation (redirect, link click, script).
    pub fn simulate_redirect(&mut self, url: &str) {
        self.push(url);
    }

    fn push(&mut self, url: &str) {
        if self.filter.should_block(url) {
            return;
        }
        if !self.history.is_empty() {
            self.history.truncate(self.position + 1);
        }
        self.history.push(url.to_string());
        self.position = self.history.len() - 1;
        self.content = None;
        self.notify();
    }

    fn notify(&self) {
        let event = ShellEvent::AddressChanged {
            tab: self.tab_id.clone(),
            url: self.current_address(),
        };
        // The receiver is gone only while the shell is shutting down.
        let _ = self.events.send(event);
    }
}

impl PageView for HeadlessView {
    fn navigate(&mut self, url: &str) {
        self.push(url);
    }

    fn current_address(&self) -> String {
        self.history.get(self.position).cloned().unwrap_or_default()
    }

    fn back(&mut self) {
        if self.position > 0 {
            self.position -= 1;
            self.content = None;
            self.notify();
        }
    }

    fn forward(&mut self) {
        if self.position + 1 < self.history.len() {
            self.position += 1;
            self.content = None;
            self.notify();
        }
    }

    fn reload(&mut self) {
        self.reloads += 1;
        self.content = None;
    }

    fn set_content(&mut self, html: &str) {
        self.content = Some(html.to_string());
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Creates headless views that report to a shared event channel and
/// consult a shared request filter.
pub struct HeadlessViewFactory {
    events: Sender<ShellEvent>,
    filter: Arc<RequestFilter>,
}

impl HeadlessViewFactory {
    pub fn new(events: Sender<ShellEvent>, filter: Arc<RequestFilter>) -> Self {
        Self { events, filter }
    }
}

impl ViewFactory for HeadlessViewFactory {
    type View = HeadlessView;

    fn create_view(&mut self, tab_id: &TabId) -> Result<HeadlessView, ViewError> {
        Ok(HeadlessView::new(
            tab_id.clone(),
            self.events.clone(),
            self.filter.clone(),
        ))
    }
}

/// A browser shell driven without a window.
pub struct HeadlessBrowser {
    shell: BrowserShell<HeadlessViewFactory>,
    events: Receiver<ShellEvent>,
}

impl HeadlessBrowser {
    /// Builds the shell and opens the first tab at the home address.
    pub fn new(config: BrowserConfig) -> Self {
        let (tx, rx) = channel();
        let filter = Arc::new(BrowserShell::<HeadlessViewFactory>::build_filter(&config));
        let factory = HeadlessViewFactory::new(tx, filter.clone());
        let mut shell = BrowserShell::with_filter(config, factory, filter);
        // Headless views never fail to build.
        let _ = shell.startup();
        let mut browser = Self { shell, events: rx };
        browser.pump_events();
        browser
    }

    /// Applies a command, then delivers any address changes it caused.
    pub fn dispatch(&mut self, command: ShellCommand) -> ChromeState {
        self.shell.handle_command(command);
        self.pump_events();
        self.shell.chrome_state()
    }

    /// Delivers queued view notifications to the shell.
    pub fn pump_events(&mut self) -> usize {
        let mut delivered = 0;
        while let Ok(event) = self.events.try_recv() {
            self.shell.handle_event(event);
            delivered += 1;
        }
        delivered
    }

    pub fn shell(&self) -> &BrowserShell<HeadlessViewFactory> {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut BrowserShell<HeadlessViewFactory> {
        &mut self.shell
    }
}
