// Stark Browser services
// Stateless or process-wide engines: request filtering, settings, theming.

pub mod request_filter;
pub mod settings_engine;
pub mod theme_engine;
