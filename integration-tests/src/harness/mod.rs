pub mod input;
pub mod settings;
pub mod tracing;

pub use input::{failing_input, log_line, scripted_input};
pub use settings::settings;
pub use self::tracing::{CapturedEvent, events_named, init_test_tracing};
