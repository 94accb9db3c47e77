mod fixtures;
pub mod tracing;

pub use fixtures::LogFixture;
pub use tracing::{CapturedEvent, init_test_tracing};
