//! Lambda handler and pipeline orchestration

pub mod backends;
pub mod handler;

// Re-export the main handler for convenience
pub use backends::{AwsBackends, Backends, SlackConnector};
pub use handler::{handler, process_event};
