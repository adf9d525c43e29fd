//! Construction of the external service clients used by one invocation.

use async_trait::async_trait;
use aws_config::SdkConfig;

use crate::ai::{BedrockModelClient, ModelClient};
use crate::core::parameters::{ParameterStore, SsmParameterStore};
use crate::errors::AlertError;
use crate::slack::{ChatClient, ChatConnector, SlackClient};

/// Factory for the collaborators the pipeline talks to.
#[async_trait]
pub trait Backends: Send + Sync {
    /// Language-model client for `region`.
    async fn model_client(&self, region: &str) -> Box<dyn ModelClient>;

    /// Secret store holding the Slack token.
    async fn parameter_store(&self) -> Box<dyn ParameterStore>;

    /// Builder for the chat client once the token is known.
    fn chat_connector(&self) -> &dyn ChatConnector;
}

/// Builds `SlackClient`s.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlackConnector;

impl ChatConnector for SlackConnector {
    fn connect(&self, token: String) -> Result<Box<dyn ChatClient>, AlertError> {
        Ok(Box::new(SlackClient::new(token)?))
    }
}

/// Production backends: Bedrock, SSM and the Slack Web API.
pub struct AwsBackends {
    shared: SdkConfig,
    slack: SlackConnector,
}

impl AwsBackends {
    /// Load AWS settings from the Lambda environment.
    pub async fn load() -> Self {
        let shared = aws_config::from_env().load().await;
        Self {
            shared,
            slack: SlackConnector,
        }
    }
}

#[async_trait]
impl Backends for AwsBackends {
    async fn model_client(&self, region: &str) -> Box<dyn ModelClient> {
        Box::new(BedrockModelClient::new(&self.shared, region))
    }

    async fn parameter_store(&self) -> Box<dyn ParameterStore> {
        Box::new(SsmParameterStore::new(&self.shared))
    }

    fn chat_connector(&self) -> &dyn ChatConnector {
        &self.slack
    }
}
