mod monitor;

pub use monitor::{AlertConfig, MonitorConfig};
