// Stark Browser shared type definitions
// Each submodule defines types used across the application.

pub mod bookmark;
pub mod command;
pub mod config;
pub mod errors;
pub mod settings;
pub mod tab;
