//! Prompt construction for CloudTrail event summaries.

use serde_json::{Value, json};

use crate::errors::AlertError;

/// Headings the model is asked to fill, in order. `{timezone}` is substituted.
pub const SUMMARY_HEADINGS: [&str; 7] = [
    "*Event summary*",
    "*Detected at ({timezone})*",
    "*Account ID*",
    "*Region*",
    "*Resource information*",
    "*Actor information*",
    "*Expected risks*",
];

/// Serialize an event as indented JSON.
///
/// Object keys come out in a stable order and non-ASCII text is kept as-is,
/// so the same event always produces the same text.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn serialize_event(event: &Value) -> Result<String, AlertError> {
    Ok(serde_json::to_string_pretty(event)?)
}

/// Build the single user prompt sent to the model.
#[must_use]
pub fn build_prompt(event_data: &str, language: &str, timezone: &str) -> String {
    let headings = SUMMARY_HEADINGS
        .iter()
        .map(|h| h.replace("{timezone}", timezone))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "You are an expert who explains AWS CloudTrail event data.\n\
         Based on the event data, write a concise explanation for non-engineers in {language}.\n\
         \n\
         ## event data\n\
         {event_data}\n\
         \n\
         Format the answer for a Slack post using exactly the headings below.\n\
         \n\
         {headings}\n\
         At most two items as a bulleted list\n"
    )
}

/// Request body for a single-turn Bedrock `InvokeModel` call.
#[must_use]
pub fn build_request_body(prompt: &str) -> Value {
    json!({
        "messages": [
            {
                "role": "user",
                "content": [{ "text": prompt }]
            }
        ]
    })
}
