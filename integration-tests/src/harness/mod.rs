mod fixture;
mod runner;
pub mod tracing;

pub use fixture::LogFixture;
pub use runner::{run_monitor, run_monitor_with};
pub use self::tracing::{CapturedEvent, init_test_tracing};
