//! Summary generation with failure containment.
//!
//! `generate_notification_message` never fails: any error while building the
//! prompt, calling the model or reading its response is logged and replaced by
//! a fallback message that still carries the original event.

use serde_json::Value;
use tracing::{error, info};

use super::client::{ModelClient, extract_response_text};
use super::prompt_builder::{build_prompt, build_request_body, serialize_event};
use crate::errors::AlertError;

/// First line of the message posted when the model could not summarize an event.
pub const FALLBACK_HEADING: &str = "*An error occurred while generating the summary*";

/// Settings the generator needs besides the event itself.
#[derive(Debug, Clone)]
pub struct SummaryOptions {
    pub model_id: String,
    pub language: String,
    pub timezone: String,
}

/// Result of one summarization attempt.
#[derive(Debug)]
pub enum SummaryOutcome {
    Generated(String),
    Fallback { error: AlertError, text: String },
}

impl SummaryOutcome {
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, SummaryOutcome::Fallback { .. })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            SummaryOutcome::Generated(text) | SummaryOutcome::Fallback { text, .. } => text,
        }
    }

    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            SummaryOutcome::Generated(text) | SummaryOutcome::Fallback { text, .. } => text,
        }
    }
}

/// Build the fallback message for an event the model could not summarize.
#[must_use]
pub fn fallback_message(event: &Value) -> String {
    let event_data = serde_json::to_string_pretty(event).unwrap_or_else(|_| event.to_string());
    format!("{FALLBACK_HEADING}\n\n*Event data*\n```\n{event_data}\n```")
}

async fn request_summary(
    model: &dyn ModelClient,
    options: &SummaryOptions,
    event: &Value,
) -> Result<String, AlertError> {
    let event_data = serialize_event(event)?;
    let prompt = build_prompt(&event_data, &options.language, &options.timezone);

    #[cfg(feature = "debug-logs")]
    tracing::debug!("Using Bedrock prompt:\n{}", prompt);

    let body = build_request_body(&prompt);
    let response = model.invoke(&options.model_id, &body).await?;
    extract_response_text(&response)
}

/// Summarize `event`, keeping the error when falling back.
pub async fn summarize_event(
    model: &dyn ModelClient,
    options: &SummaryOptions,
    event: &Value,
) -> SummaryOutcome {
    match request_summary(model, options, event).await {
        Ok(text) => {
            info!(model_id = %options.model_id, "Generated event summary");
            SummaryOutcome::Generated(text)
        }
        Err(e) => {
            error!(model_id = %options.model_id, error = %e, "Bedrock error: {:?}", e);
            SummaryOutcome::Fallback {
                text: fallback_message(event),
                error: e,
            }
        }
    }
}

/// Produce the Slack message for `event`: the model's summary, or the fallback.
pub async fn generate_notification_message(
    model: &dyn ModelClient,
    options: &SummaryOptions,
    event: &Value,
) -> String {
    summarize_event(model, options, event).await.into_text()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fallback_message_layout() {
        let text = fallback_message(&json!({"eventName": "CreateUser"}));
        assert!(text.starts_with(FALLBACK_HEADING));
        assert!(text.contains("```\n{\n  \"eventName\": \"CreateUser\"\n}\n```"));
    }

    #[test]
    fn test_fallback_keeps_non_ascii() {
        let text = fallback_message(&json!({"userName": "山田"}));
        assert!(text.contains("山田"));
    }
}
