use logstat_core::conf::{MonitorConfig, MonitorSettings};

/// Test settings: no color, ticks slow enough that only the final flush
/// reports unless `adjust` says otherwise.
pub fn settings(adjust: impl FnOnce(&mut MonitorConfig)) -> MonitorSettings {
    let mut config = MonitorConfig {
        color: false,
        tick_millis: 60_000,
        ..Default::default()
    };
    adjust(&mut config);
    config.validate().expect("test settings must validate")
}
