// Stark Browser window front-end (feature `gui`).

pub mod chrome;
pub mod webview_app;
pub mod wry_view;
