use integration_tests::harness::{events_named, init_test_tracing, log_line, scripted_input, settings};
use logstat_core::logs::{StopReason, run_monitor};
use pretty_assertions::assert_eq;
use std::time::Duration;
use tracing::Level;

#[tokio::test]
async fn traffic_spike_raises_then_clears_alert() {
    // Arrange
    let events = init_test_tracing();
    let (tx, input) = scripted_input();

    // Queued before the first tick. Any split of the ten across ticks one and two
    // still averages 5 once the two-slot window fills.
    for _ in 0..10 {
        tx.send(log_line("/api", 200, 1)).unwrap();
    }

    let settings = settings(|c| {
        c.tick_millis = 250;
        c.interval = 1;
        c.count = Some(4);
        c.alerts.rate_history = 2;
        c.alerts.max_rate = 3;
    });
    let mut out = Vec::new();

    // Act: ticks push 10, 0 (avg 5 > 3: alert), then 0, 0 (avg 0 < 3: recovered)
    let summary = tokio::time::timeout(
        Duration::from_secs(10),
        run_monitor(&settings, input, &mut out),
    )
    .await
    .expect("monitor should stop after four reports")
    .unwrap();

    // Assert
    assert_eq!(summary.stop, StopReason::CountReached);

    let transitions = events_named(&events, "alert_transition");
    let levels: Vec<Level> = transitions.iter().map(|e| e.level).collect();
    assert_eq!(levels, vec![Level::ERROR, Level::INFO]);

    assert_eq!(transitions[0].field("average"), Some("5"));
    assert_eq!(transitions[0].field("to"), Some("Triggered"));
    assert!(
        transitions[0]
            .field("message")
            .is_some_and(|m| m.starts_with("High traffic generated an alert - hits = 5 req/sec"))
    );
    assert_eq!(transitions[1].field("average"), Some("0"));
    assert_eq!(transitions[1].field("to"), Some("Normal"));

    drop(tx);
}
