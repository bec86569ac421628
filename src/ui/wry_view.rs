//! `PageView` backed by a `wry` child webview.
//!
//! Each tab gets its own webview inside the main window, placed under the
//! chrome strip. Only the active tab's webview is visible.

use std::rc::Rc;
use std::sync::Arc;

use tao::event_loop::EventLoopProxy;
use tao::window::Window;
use wry::dpi::{LogicalPosition, LogicalSize};
use wry::{NewWindowResponse, PageLoadEvent, Rect, WebView, WebViewBuilder};

use crate::services::request_filter::{RequestFilter, RequestFilterTrait};
use crate::types::errors::ViewError;
use crate::types::tab::TabId;
use crate::ui::webview_app::UserEvent;
use crate::view::{PageView, ViewFactory};

/// Height of the toolbar and tab strip above the page views.
pub const CHROME_HEIGHT: f64 = 84.0;

/// Bounds of a page view for a window of the given logical size.
pub fn page_bounds(width: f64, height: f64) -> Rect {
    Rect {
        position: LogicalPosition::new(0.0, CHROME_HEIGHT).into(),
        size: LogicalSize::new(width, (height - CHROME_HEIGHT).max(0.0)).into(),
    }
}

/// Bounds of the chrome webview.
pub fn chrome_bounds(width: f64) -> Rect {
    Rect {
        position: LogicalPosition::new(0.0, 0.0).into(),
        size: LogicalSize::new(width, CHROME_HEIGHT).into(),
    }
}

/// Only http(s) and file loads count as address changes. Generated pages
/// (`load_html`) surface as `about:` or `data:` URLs and must not replace
/// the tab's address.
fn is_page_address(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://") || url.starts_with("file://")
}

pub struct WryView {
    webview: WebView,
    last_address: String,
    showing_content: bool,
}

impl WryView {
    pub fn set_bounds(&self, bounds: Rect) {
        if let Err(e) = self.webview.set_bounds(bounds) {
            log::warn!("Failed to resize page view: {}", e);
        }
    }
}

impl PageView for WryView {
    fn navigate(&mut self, url: &str) {
        self.last_address = url.to_string();
        self.showing_content = false;
        if let Err(e) = self.webview.load_url(url) {
            log::warn!("Failed to load {}: {}", url, e);
        }
    }

    fn current_address(&self) -> String {
        match self.webview.url() {
            Ok(url) if is_page_address(&url) => url,
            _ => self.last_address.clone(),
        }
    }

    fn back(&mut self) {
        self.showing_content = false;
        let _ = self.webview.evaluate_script("history.back()");
    }

    fn forward(&mut self) {
        self.showing_content = false;
        let _ = self.webview.evaluate_script("history.forward()");
    }

    fn reload(&mut self) {
        if self.showing_content {
            let address = self.last_address.clone();
            self.navigate(&address);
            return;
        }
        if let Err(e) = self.webview.reload() {
            log::warn!("Reload failed: {}", e);
        }
    }

    fn set_content(&mut self, html: &str) {
        if let Ok(url) = self.webview.url() {
            if is_page_address(&url) {
                self.last_address = url;
            }
        }
        self.showing_content = true;
        if let Err(e) = self.webview.load_html(html) {
            log::warn!("Failed to show generated page: {}", e);
        }
    }

    fn set_visible(&mut self, visible: bool) {
        let _ = self.webview.set_visible(visible);
    }
}

/// Builds one child webview per tab.
pub struct WryViewFactory {
    window: Rc<Window>,
    proxy: EventLoopProxy<UserEvent>,
    filter: Arc<RequestFilter>,
}

impl WryViewFactory {
    pub fn new(window: Rc<Window>, proxy: EventLoopProxy<UserEvent>, filter: Arc<RequestFilter>) -> Self {
        Self { window, proxy, filter }
    }

    /// Current page area in logical pixels.
    pub fn current_page_bounds(&self) -> Rect {
        let size = self.window.inner_size().to_logical::<f64>(self.window.scale_factor());
        page_bounds(size.width, size.height)
    }
}

impl ViewFactory for WryViewFactory {
    type View = WryView;

    fn create_view(&mut self, tab_id: &TabId) -> Result<WryView, ViewError> {
        let nav_filter = self.filter.clone();
        let nw_filter = self.filter.clone();
        let nw_proxy = self.proxy.clone();
        let load_proxy = self.proxy.clone();
        let ipc_proxy = self.proxy.clone();
        let load_tab = tab_id.clone();
        let ipc_tab = tab_id.clone();

        let webview = WebViewBuilder::new()
            .with_bounds(self.current_page_bounds())
            .with_navigation_handler(move |url| !nav_filter.should_block(&url))
            .with_new_window_req_handler(move |url, _features| {
                if !nw_filter.should_block(&url) {
                    let _ = nw_proxy.send_event(UserEvent::OpenTab(url));
                }
                NewWindowResponse::Deny
            })
            .with_on_page_load_handler(move |event, url| {
                if matches!(event, PageLoadEvent::Finished) && is_page_address(&url) {
                    let _ = load_proxy.send_event(UserEvent::AddressChanged {
                        tab: load_tab.clone(),
                        url,
                    });
                }
            })
            .with_ipc_handler(move |msg: wry::http::Request<String>| {
                let _ = ipc_proxy.send_event(UserEvent::PageMessage {
                    tab: ipc_tab.clone(),
                    body: msg.body().clone(),
                });
            })
            .with_devtools(cfg!(debug_assertions))
            .build_as_child(self.window.as_ref())
            .map_err(|e| ViewError::Build(e.to_string()))?;

        Ok(WryView {
            webview,
            last_address: String::new(),
            showing_content: false,
        })
    }
}
