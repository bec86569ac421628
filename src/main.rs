//! Stark Browser: a minimal tabbed web browser shell.
//!
//! Entry point: opens the browser window. When built without the `gui`
//! feature, drives the shell headlessly through a short console demo.

use stark_browser::types::config::BrowserConfig;

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

#[cfg(feature = "gui")]
fn main() {
    init_logging();
    let config = BrowserConfig::from_env();
    if let Err(e) = stark_browser::ui::webview_app::run(config) {
        log::error!("Browser failed to start: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    use stark_browser::managers::bookmark_manager::BookmarkManagerTrait;
    use stark_browser::services::request_filter::RequestFilterTrait;
    use stark_browser::types::command::ShellCommand;
    use stark_browser::view::headless::HeadlessBrowser;

    init_logging();
    let config = BrowserConfig::from_env();
    println!("{} v{} (headless)", config.window_title, env!("CARGO_PKG_VERSION"));

    let mut browser = HeadlessBrowser::new(config);
    println!("  home: {}", browser.shell().chrome_state().address);

    for text in ["example.com", "rust borrow checker", "https://www.rust-lang.org"] {
        let state = browser.dispatch(ShellCommand::Navigate { text: text.to_string() });
        println!("  {:<28} -> {}", text, state.address);
        browser.dispatch(ShellCommand::AddBookmark);
    }

    let state = browser.dispatch(ShellCommand::NewTab { url: None });
    println!("  tabs open: {}", state.tabs.len());
    browser.dispatch(ShellCommand::CloseActiveTab);
    let state = browser.dispatch(ShellCommand::CloseActiveTab);
    println!("  tabs after closing twice: {}", state.tabs.len());

    let filter = browser.shell().request_filter.clone();
    for url in ["https://ads.doubleclick.net/pixel", "https://example.com/"] {
        let verdict = if filter.should_block(url) { "blocked" } else { "allowed" };
        println!("  {:<36} {}", url, verdict);
    }

    println!("  bookmarks: {}", browser.shell().bookmarks.list_bookmarks().len());
    println!("{}", browser.shell().bookmarks.render());
}
