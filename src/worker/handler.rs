use std::any::Any;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{Instrument, error, info, info_span};

use super::backends::{AwsBackends, Backends};
use crate::ai::{SummaryOptions, generate_notification_message};
use crate::core::config::{AppConfig, ConfigSource, EnvSource};
use crate::core::event::extract_audit_event;
use crate::core::models::NotificationResult;
use crate::errors::AlertError;
use crate::slack::{DeliveryTarget, send_slack_notification};

/// Service name attached to every invocation span.
pub const SERVICE_NAME: &str = "aws-resources-change-alert";

impl From<&AppConfig> for SummaryOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            model_id: config.bedrock_model_id.clone(),
            language: config.summary_language.clone(),
            timezone: config.summary_timezone.clone(),
        }
    }
}

impl From<&AppConfig> for DeliveryTarget {
    fn from(config: &AppConfig) -> Self {
        Self {
            token_param: config.slack_token_param.clone(),
            channel: config.slack_channel.clone(),
        }
    }
}

async fn run_pipeline<S, B>(
    source: &S,
    backends: &B,
    payload: &Value,
) -> Result<NotificationResult, AlertError>
where
    S: ConfigSource + ?Sized,
    B: Backends + ?Sized,
{
    let config = AppConfig::from_source(source)?;

    let event = extract_audit_event(payload);
    let model = backends.model_client(&config.bedrock_region).await;
    let message =
        generate_notification_message(model.as_ref(), &SummaryOptions::from(&config), event).await;

    let params = backends.parameter_store().await;
    Ok(send_slack_notification(
        params.as_ref(),
        backends.chat_connector(),
        &DeliveryTarget::from(&config),
        &message,
    )
    .await)
}

fn panic_detail(panic: &(dyn Any + Send)) -> String {
    panic
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

/// Validate configuration, summarize the event and post it to Slack.
///
/// Always returns a result record; configuration problems, internal errors and
/// panics are reported as status 500.
pub async fn process_event<S, B>(source: &S, backends: &B, payload: &Value) -> NotificationResult
where
    S: ConfigSource + ?Sized,
    B: Backends + ?Sized,
{
    match AssertUnwindSafe(run_pipeline(source, backends, payload))
        .catch_unwind()
        .await
    {
        Ok(Ok(result)) => result,
        Ok(Err(e @ AlertError::ConfigError(_))) => {
            error!("{}", e);
            NotificationResult::failure(e.to_string())
        }
        Ok(Err(e)) => {
            error!("Processing error: {:?}", e);
            NotificationResult::failure(format!("processing error: {e}"))
        }
        Err(panic) => {
            let detail = panic_detail(panic.as_ref());
            error!("Processing error: {}", detail);
            NotificationResult::failure(format!("processing error: {detail}"))
        }
    }
}

/// Lambda handler for the alert function.
///
/// # Errors
///
/// Never returns an error; every failure is reported in the result record.
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<NotificationResult, Error> {
    let (payload, context) = event.into_parts();
    let span = info_span!(
        "invocation",
        service = SERVICE_NAME,
        request_id = %context.request_id
    );

    async move {
        info!("Processing started");
        let backends = AwsBackends::load().await;
        let result = process_event(&EnvSource, &backends, &payload).await;
        info!(
            status_code = result.status_code,
            message = %result.message,
            "Processing finished"
        );
        Ok(result)
    }
    .instrument(span)
    .await
}

pub use self::function_handler as handler;
