//! Stark Browser: a minimal tabbed web browser shell.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod managers;
pub mod services;
pub mod types;
pub mod view;

#[cfg(feature = "gui")]
pub mod ui;
