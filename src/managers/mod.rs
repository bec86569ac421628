// Stark Browser managers
// Each manager owns one slice of the shell's in-memory state.

pub mod bookmark_manager;
pub mod navigation_controller;
pub mod tab_manager;
