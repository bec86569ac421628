//! Page view capability.
//!
//! Any rendering surface that can navigate, report its address and show
//! generated content can back a tab. Address changes are not returned from
//! these calls: views report them later as `ShellEvent::AddressChanged`.

pub mod headless;

use crate::types::errors::ViewError;
use crate::types::tab::TabId;

/// Operations the shell needs from an embedded page view.
pub trait PageView {
    /// Starts loading `url`. Fire-and-forget.
    fn navigate(&mut self, url: &str);
    fn current_address(&self) -> String;
    fn back(&mut self);
    fn forward(&mut self);
    fn reload(&mut self);
    /// Replaces the rendered document without changing the address.
    fn set_content(&mut self, html: &str);
    /// Shows or hides the view when tabs are switched. No-op by default.
    fn set_visible(&mut self, _visible: bool) {}
}

/// Builds page views for newly opened tabs.
pub trait ViewFactory {
    type View: PageView;

    fn create_view(&mut self, tab_id: &TabId) -> Result<Self::View, ViewError>;
}
