/// Resource change alert - posts AI summaries of AWS CloudTrail events to Slack.
///
/// This crate implements a single Lambda function that:
/// 1. Receives a CloudTrail event, either wrapped by EventBridge or directly
/// 2. Asks a Bedrock model for a short explanation aimed at non-engineers
/// 3. Posts the explanation to a Slack channel using a bot token kept in SSM
///
/// A failed model call never drops the event: the raw event is posted instead.
/// Every invocation returns a `{statusCode, message}` record.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - Amazon Bedrock for summarization
/// - SSM Parameter Store for the Slack bot token
/// - slack-morphism types for the Slack message layout
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use resource_change_alert::core::config::EnvSource;
/// use resource_change_alert::worker::{AwsBackends, process_event};
///
/// #[tokio::main]
/// async fn main() {
///     resource_change_alert::setup_logging();
///
///     let backends = AwsBackends::load().await;
///     let event = serde_json::json!({
///         "detail": { "eventName": "CreateUser", "awsRegion": "ap-northeast-1" }
///     });
///
///     let result = process_event(&EnvSource, &backends, &event).await;
///     println!("{}: {}", result.status_code, result.message);
/// }
/// ```
// Module declarations
pub mod ai;
pub mod core;
pub mod errors;
pub mod slack;
pub mod worker;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// The level comes from `LOG_LEVEL`, then `RUST_LOG`, and defaults to `info`.
/// Calling it more than once keeps the first subscriber.
///
/// # Example
///
/// ```
/// resource_change_alert::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = std::env::var("LOG_LEVEL")
        .ok()
        .and_then(|level| EnvFilter::try_new(level).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
