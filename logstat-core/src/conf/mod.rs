mod error;
mod loader;
mod runtime;
pub mod types;
mod validate;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use loader::{load_config, load_settings};
pub use runtime::{AlertSettings, MonitorSettings};
pub use types::{AlertConfig, MonitorConfig};
