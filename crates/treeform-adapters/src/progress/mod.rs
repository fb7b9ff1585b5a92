//! Progress sink adapters.

mod recording;
mod tracing_sink;

pub use recording::RecordingSink;
pub use tracing_sink::TracingSink;
