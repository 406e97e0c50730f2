use crate::conf::error::ConfigError;
use crate::conf::runtime::MonitorSettings;
use crate::conf::types::MonitorConfig;
use std::fs;
use std::path::Path;

/// Read a TOML config file. Keys left out keep their defaults.
pub fn load_config(path: &Path) -> Result<MonitorConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;

    toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))
}

/// Read and validate a config file in one step.
pub fn load_settings(path: &Path) -> Result<MonitorSettings, ConfigError> {
    load_config(path)?.validate()
}
