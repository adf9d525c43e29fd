//! Slack API client module
//!
//! Posts alert messages through the Web API and reports Slack's `ok` flag.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use slack_morphism::prelude::SlackApiChatPostMessageRequest;
use slack_morphism::{SlackApiToken, SlackApiTokenValue};

use crate::errors::AlertError;

/// Base URL of the Slack Web API.
pub const SLACK_API_BASE_URL: &str = "https://slack.com/api";

/// Acknowledgement returned by `chat.postMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostMessageAck {
    pub ok: bool,
    pub error: Option<String>,
}

impl PostMessageAck {
    #[must_use]
    pub fn accepted() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    #[must_use]
    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
        }
    }
}

/// Chat service the alert is posted to.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Post one message and return the service acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns an error if the service cannot be reached or its response
    /// cannot be read. A rejected post is an `Ok` acknowledgement with
    /// `ok == false`.
    async fn post_message(
        &self,
        request: &SlackApiChatPostMessageRequest,
    ) -> Result<PostMessageAck, AlertError>;
}

/// Slack Web API client authenticated with a bot token.
pub struct SlackClient {
    token: SlackApiToken,
    http: Client,
    post_message_url: String,
}

impl SlackClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(token: String) -> Result<Self, AlertError> {
        Self::with_base_url(token, SLACK_API_BASE_URL)
    }

    /// Client that sends Web API calls to `base_url` instead of slack.com.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_base_url(token: String, base_url: &str) -> Result<Self, AlertError> {
        let http = Client::builder()
            .build()
            .map_err(|e| AlertError::HttpError(format!("Failed to build Slack HTTP client: {e}")))?;

        Ok(Self {
            token: SlackApiToken::new(SlackApiTokenValue::new(token)),
            http,
            post_message_url: format!("{}/chat.postMessage", base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl ChatClient for SlackClient {
    async fn post_message(
        &self,
        request: &SlackApiChatPostMessageRequest,
    ) -> Result<PostMessageAck, AlertError> {
        let resp = self
            .http
            .post(&self.post_message_url)
            .bearer_auth(&self.token.token_value.0)
            .json(request)
            .send()
            .await
            .map_err(|e| AlertError::HttpError(format!("chat.postMessage request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(AlertError::SlackApiError(format!(
                "chat.postMessage HTTP {status}: {text}"
            )));
        }

        resp.json::<PostMessageAck>().await.map_err(|e| {
            AlertError::SlackApiError(format!("Failed to parse chat.postMessage response: {e}"))
        })
    }
}
