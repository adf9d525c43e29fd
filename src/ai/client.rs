//! Bedrock runtime client module
//!
//! Wraps the `InvokeModel` call and the validation of its response body.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::config::Region;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::primitives::Blob;
use serde_json::Value;
use tracing::debug;

use crate::errors::AlertError;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Language-model inference service.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Invoke `model_id` with a JSON request body and return the raw response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the service rejects it.
    async fn invoke(&self, model_id: &str, body: &Value) -> Result<Vec<u8>, AlertError>;
}

/// `ModelClient` backed by the Amazon Bedrock runtime.
pub struct BedrockModelClient {
    client: BedrockClient,
}

impl BedrockModelClient {
    /// Build a client for `region`, reusing credentials from `shared`.
    #[must_use]
    pub fn new(shared: &SdkConfig, region: &str) -> Self {
        let conf = aws_sdk_bedrockruntime::config::Builder::from(shared)
            .region(Region::new(region.to_string()))
            .build();
        Self {
            client: BedrockClient::from_conf(conf),
        }
    }
}

#[async_trait]
impl ModelClient for BedrockModelClient {
    async fn invoke(&self, model_id: &str, body: &Value) -> Result<Vec<u8>, AlertError> {
        let payload = serde_json::to_vec(body)?;
        debug!(model_id, bytes = payload.len(), "Invoking Bedrock model");

        let response = self
            .client
            .invoke_model()
            .model_id(model_id)
            .content_type(JSON_CONTENT_TYPE)
            .accept(JSON_CONTENT_TYPE)
            .body(Blob::new(payload))
            .send()
            .await
            .map_err(|e| AlertError::ModelError(DisplayErrorContext(&e).to_string()))?;

        Ok(response.body.into_inner())
    }
}

/// Extract the first content block's text from a Bedrock response body.
///
/// The body must contain `output.message`; the first entry of
/// `output.message.content` must carry a non-blank `text`. Non-string `text`
/// values are rendered as JSON.
///
/// # Errors
///
/// Returns `AlertError::InvalidResponse` when the body is not JSON or does not
/// have the expected shape.
pub fn extract_response_text(body: &[u8]) -> Result<String, AlertError> {
    let parsed: Value = serde_json::from_slice(body)
        .map_err(|e| AlertError::InvalidResponse(format!("body is not JSON: {e}")))?;

    let message = parsed
        .get("output")
        .and_then(|output| output.get("message"))
        .ok_or_else(|| AlertError::InvalidResponse("missing output.message".to_string()))?;

    let text = message
        .get("content")
        .and_then(Value::as_array)
        .and_then(|blocks| blocks.first())
        .and_then(|block| block.get("text"))
        .ok_or_else(|| {
            AlertError::InvalidResponse("missing output.message.content[0].text".to_string())
        })?;

    let text = match text {
        Value::Null => {
            return Err(AlertError::InvalidResponse(
                "output.message.content[0].text is null".to_string(),
            ));
        }
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    if text.trim().is_empty() {
        return Err(AlertError::InvalidResponse(
            "model returned empty text".to_string(),
        ));
    }

    Ok(text)
}
