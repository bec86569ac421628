//! Unit tests for the NavigationController.
//!
//! Views are headless; their address notifications are delivered by hand
//! with `pump`, as the event loop would.

use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

use rstest::rstest;
use stark_browser::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use stark_browser::managers::navigation_controller::{resolve_input, NavigationController};
use stark_browser::managers::tab_manager::TabManagerTrait;
use stark_browser::services::request_filter::{DomainBlocklist, RequestFilter};
use stark_browser::types::command::ShellEvent;
use stark_browser::types::config::BrowserConfig;
use stark_browser::view::headless::HeadlessViewFactory;
use stark_browser::view::PageView;

fn setup() -> (NavigationController<HeadlessViewFactory>, Receiver<ShellEvent>) {
    let (tx, rx) = channel();
    let config = BrowserConfig::default();
    let filter = Arc::new(RequestFilter::new(DomainBlocklist::new(config.blocked_domains.clone())));
    let nav = NavigationController::new(&config, HeadlessViewFactory::new(tx, filter));
    (nav, rx)
}

fn pump(nav: &mut NavigationController<HeadlessViewFactory>, rx: &Receiver<ShellEvent>) {
    while let Ok(ShellEvent::AddressChanged { tab, url }) = rx.try_recv() {
        nav.on_address_changed(&tab, &url);
    }
}

fn active_address(nav: &NavigationController<HeadlessViewFactory>) -> String {
    nav.tabs().get_active_tab().unwrap().view.current_address()
}

#[rstest]
#[case("example.com", "https://example.com")]
#[case("  example.com  ", "https://example.com")]
#[case("www.rust-lang.org/learn", "https://www.rust-lang.org/learn")]
#[case("https://a.com", "https://a.com")]
#[case("http://a.com/path?q=1", "http://a.com/path?q=1")]
#[case("openai chat", "https://www.google.com/search?q=openai+chat")]
#[case("rust", "https://www.google.com/search?q=rust")]
fn test_resolve_input(#[case] input: &str, #[case] expected: &str) {
    let config = BrowserConfig::default();
    assert_eq!(
        resolve_input(input, &config.url_scheme, &config.search_endpoint),
        expected
    );
}

#[test]
fn test_resolve_input_uses_configured_scheme_and_endpoint() {
    assert_eq!(
        resolve_input("example.com", "http://", "https://duckduckgo.com/?q="),
        "http://example.com"
    );
    assert_eq!(
        resolve_input("two words", "http://", "https://duckduckgo.com/?q="),
        "https://duckduckgo.com/?q=two+words"
    );
}

#[test]
fn test_resolve_input_passes_malformed_text_through() {
    // Has a dot and an http prefix, so it is left alone for the view to reject.
    assert_eq!(
        resolve_input("httpnonsense..", "https://", "https://s/?q="),
        "httpnonsense.."
    );
}

#[test]
fn test_open_tab_defaults_to_home() {
    let (mut nav, rx) = setup();
    nav.open_tab(None, None).unwrap();
    pump(&mut nav, &rx);
    assert_eq!(active_address(&nav), "https://www.google.com");
    assert_eq!(nav.address_field(), "https://www.google.com");
    assert_eq!(nav.tabs().get_active_tab().unwrap().label, "New Tab");
}

#[test]
fn test_navigate_resolves_and_updates_address_field() {
    let (mut nav, rx) = setup();
    nav.open_tab(None, None).unwrap();
    let url = nav.navigate("example.com");
    assert_eq!(url.as_deref(), Some("https://example.com"));
    pump(&mut nav, &rx);
    assert_eq!(nav.address_field(), "https://example.com");
}

#[test]
fn test_navigate_ignores_blank_input() {
    let (mut nav, rx) = setup();
    nav.open_tab(None, None).unwrap();
    pump(&mut nav, &rx);
    assert_eq!(nav.navigate("   "), None);
    assert_eq!(active_address(&nav), "https://www.google.com");
}

#[test]
fn test_commands_without_tabs_are_noops() {
    let (mut nav, _rx) = setup();
    assert_eq!(nav.navigate("example.com"), None);
    nav.go_back();
    nav.go_forward();
    nav.reload();
    nav.go_home();
    nav.close_active_tab();
    let mut bookmarks = BookmarkManager::new();
    assert!(!nav.bookmark_current(&mut bookmarks));
    nav.show_bookmarks(&bookmarks);
    assert_eq!(nav.tabs().tab_count(), 0);
    assert_eq!(nav.address_field(), "");
}

#[test]
fn test_back_forward_and_home() {
    let (mut nav, rx) = setup();
    nav.open_tab(Some("https://a.com"), None).unwrap();
    nav.navigate("b.com");
    pump(&mut nav, &rx);

    nav.go_back();
    pump(&mut nav, &rx);
    assert_eq!(nav.address_field(), "https://a.com");

    nav.go_forward();
    pump(&mut nav, &rx);
    assert_eq!(nav.address_field(), "https://b.com");

    nav.go_home();
    pump(&mut nav, &rx);
    assert_eq!(nav.address_field(), "https://www.google.com");
}

#[test]
fn test_reload_targets_active_view_only() {
    let (mut nav, _rx) = setup();
    let first = nav.open_tab(None, None).unwrap();
    nav.open_tab(None, None).unwrap();
    nav.reload();
    assert_eq!(nav.tabs().get_active_tab().unwrap().view.reload_count(), 1);
    assert_eq!(nav.tabs().get_tab(&first).unwrap().view.reload_count(), 0);
}

#[test]
fn test_background_address_change_does_not_touch_field() {
    let (mut nav, rx) = setup();
    let background = nav.open_tab(Some("https://a.com"), None).unwrap();
    nav.open_tab(Some("https://b.com"), None).unwrap();
    pump(&mut nav, &rx);
    assert_eq!(nav.address_field(), "https://b.com");

    nav.on_address_changed(&background, "https://a.com/redirected");
    assert_eq!(nav.address_field(), "https://b.com");
    assert_eq!(
        nav.tabs().get_tab(&background).unwrap().address,
        "https://a.com/redirected"
    );
}

#[test]
fn test_switch_and_close_refresh_address_field() {
    let (mut nav, rx) = setup();
    let a = nav.open_tab(Some("https://a.com"), None).unwrap();
    let b = nav.open_tab(Some("https://b.com"), None).unwrap();
    pump(&mut nav, &rx);

    nav.switch_tab(&a).unwrap();
    assert_eq!(nav.address_field(), "https://a.com");

    nav.switch_tab(&b).unwrap();
    nav.close_tab(&b).unwrap();
    assert_eq!(nav.active_tab_id(), Some(&a));
    assert_eq!(nav.address_field(), "https://a.com");
}

#[test]
fn test_show_bookmarks_keeps_tab_address() {
    let (mut nav, rx) = setup();
    nav.open_tab(Some("https://a.com"), None).unwrap();
    pump(&mut nav, &rx);

    let mut bookmarks = BookmarkManager::new();
    assert!(nav.bookmark_current(&mut bookmarks));
    nav.show_bookmarks(&bookmarks);
    pump(&mut nav, &rx);

    let tab = nav.tabs().get_active_tab().unwrap();
    assert_eq!(tab.view.content(), Some(bookmarks.render().as_str()));
    assert_eq!(tab.view.current_address(), "https://a.com");
    assert_eq!(nav.address_field(), "https://a.com");
}

#[test]
fn test_bookmark_current_is_idempotent() {
    let (mut nav, _rx) = setup();
    nav.open_tab(Some("https://x.com"), None).unwrap();
    let mut bookmarks = BookmarkManager::new();
    assert!(nav.bookmark_current(&mut bookmarks));
    assert!(!nav.bookmark_current(&mut bookmarks));
    assert_eq!(bookmarks.list_bookmarks().len(), 1);
}
