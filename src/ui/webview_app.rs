//! WebView-based browser application using `wry` + `tao`.
//!
//! Architecture:
//! - One chrome webview across the top of the window (toolbar, tab strip).
//! - One child webview per tab below it; only the active one is visible.
//! - Webview callbacks never touch shell state. They post `UserEvent`s through
//!   the event loop proxy, and the loop closure, which owns the shell, applies them.
//! - Every tab's navigation and new-window requests pass through the shared
//!   `RequestFilter` first.

use std::rc::Rc;
use std::sync::Arc;

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use wry::{WebView, WebViewBuilder};

use crate::app::BrowserShell;
use crate::managers::tab_manager::TabManagerTrait;
use crate::services::theme_engine::ThemeEngineTrait;
use crate::types::command::{ChromeState, ShellCommand, ShellEvent};
use crate::types::config::BrowserConfig;
use crate::types::errors::ViewError;
use crate::types::tab::TabId;
use crate::ui::chrome;
use crate::ui::wry_view::{chrome_bounds, page_bounds, WryViewFactory};

#[derive(Debug)]
pub enum UserEvent {
    /// IPC message from the chrome webview.
    ChromeMessage(String),
    /// IPC message from a page webview (generated settings page).
    PageMessage { tab: TabId, body: String },
    /// A page finished loading a new address.
    AddressChanged { tab: TabId, url: String },
    /// A page asked for a new window; it opens as a tab instead.
    OpenTab(String),
}

type Shell = BrowserShell<WryViewFactory>;

fn push_chrome_state(chrome_view: &WebView, shell: &Shell, command_state: Option<ChromeState>) {
    let state = command_state.unwrap_or_else(|| shell.chrome_state());
    let script = chrome::update_script(&state, &shell.theme_engine.stylesheet());
    if let Err(e) = chrome_view.evaluate_script(&script) {
        log::warn!("Failed to update chrome: {}", e);
    }
}

fn handle_user_event(shell: &mut Shell, chrome_view: &WebView, event: UserEvent) {
    match event {
        UserEvent::ChromeMessage(body) => match ShellCommand::from_json(&body) {
            Ok(command) => {
                log::debug!("[IPC] {:?}", command);
                let state = shell.handle_command(command);
                push_chrome_state(chrome_view, shell, Some(state));
            }
            Err(e) => log::debug!("Dropping chrome message: {}", e),
        },
        UserEvent::PageMessage { tab, body } => match ShellCommand::from_json(&body) {
            Ok(command) if command.allowed_from_page() => {
                let state = shell.handle_command(command);
                push_chrome_state(chrome_view, shell, Some(state));
            }
            Ok(command) => log::warn!("Tab {} may not send {:?}", tab, command),
            Err(e) => log::debug!("Dropping page message from {}: {}", tab, e),
        },
        UserEvent::AddressChanged { tab, url } => {
            shell.handle_event(ShellEvent::AddressChanged { tab, url });
            push_chrome_state(chrome_view, shell, None);
        }
        UserEvent::OpenTab(url) => {
            let state = shell.handle_command(ShellCommand::NewTab { url: Some(url) });
            push_chrome_state(chrome_view, shell, Some(state));
        }
    }
}

fn resize(shell: &mut Shell, chrome_view: &WebView, width: f64, height: f64) {
    let _ = chrome_view.set_bounds(chrome_bounds(width));
    let bounds = page_bounds(width, height);
    for view in shell.navigation.tabs_mut().views_mut() {
        view.set_bounds(bounds);
    }
}

// ─── Main entry point ───

pub fn run(config: BrowserConfig) -> Result<(), ViewError> {
    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(&config.window_title)
        .with_inner_size(tao::dpi::LogicalSize::new(config.window_width, config.window_height))
        .build(&event_loop)
        .map_err(|e| ViewError::Build(e.to_string()))?;
    let window = Rc::new(window);

    let filter = Arc::new(Shell::build_filter(&config));
    let factory = WryViewFactory::new(window.clone(), proxy.clone(), filter.clone());
    let mut shell = BrowserShell::with_filter(config, factory, filter);

    let chrome_proxy = proxy.clone();
    let width = window
        .inner_size()
        .to_logical::<f64>(window.scale_factor())
        .width;
    let chrome_view = WebViewBuilder::new()
        .with_bounds(chrome_bounds(width))
        .with_html(chrome::chrome_html(&shell.theme_engine.stylesheet()))
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let _ = chrome_proxy.send_event(UserEvent::ChromeMessage(msg.body().clone()));
        })
        .with_devtools(cfg!(debug_assertions))
        .build_as_child(window.as_ref())
        .map_err(|e| ViewError::Build(e.to_string()))?;

    shell.startup().map_err(|e| ViewError::Build(e.to_string()))?;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                log::info!("Window closed, {} tabs open", shell.navigation.tabs().tab_count());
                *control_flow = ControlFlow::Exit;
            }

            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => {
                let size = size.to_logical::<f64>(window.scale_factor());
                resize(&mut shell, &chrome_view, size.width, size.height);
            }

            Event::UserEvent(user_event) => handle_user_event(&mut shell, &chrome_view, user_event),

            _ => {}
        }
    })
}
