use crate::conf::{ConfigError, MonitorConfig};
use crate::logs::SectionSelection;
use pretty_assertions::assert_eq;
use std::time::Duration;

fn invalid_field(config: MonitorConfig) -> &'static str {
    match config.validate() {
        Err(ConfigError::Invalid { field, .. }) => field,
        other => panic!("expected invalid config, got {other:?}"),
    }
}

#[test]
fn defaults_are_valid() {
    let settings = MonitorConfig::default().validate().unwrap();

    assert_eq!(settings.tick, Duration::from_secs(1));
    assert_eq!(settings.interval.get(), 10);
    assert_eq!(settings.count, None);
    assert_eq!(settings.selection, SectionSelection::Top);
    assert!(settings.color);

    let alerts = settings.alerts.expect("alerts on by default");
    assert_eq!(alerts.max_rate, 100);
    assert_eq!(alerts.rate_history.get(), 120);
}

#[test]
fn zero_interval_is_rejected() {
    let config = MonitorConfig {
        interval: 0,
        ..Default::default()
    };
    assert_eq!(invalid_field(config), "interval");
}

#[test]
fn zero_count_is_rejected() {
    let config = MonitorConfig {
        count: Some(0),
        ..Default::default()
    };
    assert_eq!(invalid_field(config), "count");
}

#[test]
fn zero_tick_is_rejected() {
    let config = MonitorConfig {
        tick_millis: 0,
        ..Default::default()
    };
    assert_eq!(invalid_field(config), "tick_millis");
}

#[test]
fn zero_history_only_matters_with_alerts() {
    let mut config = MonitorConfig::default();
    config.alerts.rate_history = 0;
    assert_eq!(invalid_field(config.clone()), "alerts.rate_history");

    config.alerts.enabled = false;
    let settings = config.validate().unwrap();
    assert!(settings.alerts.is_none());
}

#[test]
fn empty_section_name_is_rejected() {
    let config = MonitorConfig {
        top: false,
        only_sections: vec![String::new()],
        ..Default::default()
    };
    assert_eq!(invalid_field(config), "only_sections");
}

#[test]
fn range_error_names_units() {
    let config = MonitorConfig {
        interval: 0,
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        format!(
            "invalid value for 'interval': 0 is outside the allowed range 1..={} ticks",
            u64::MAX
        )
    );
}

#[test]
fn long_interval_and_history_are_accepted() {
    let mut config = MonitorConfig {
        interval: 100_000,
        ..Default::default()
    };
    config.alerts.rate_history = 100_000;

    let settings = config.validate().unwrap();
    assert_eq!(settings.interval.get(), 100_000);
    assert_eq!(settings.alerts.map(|a| a.rate_history.get()), Some(100_000));
}
