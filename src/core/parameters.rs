use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_ssm::Client as SsmClient;
use aws_sdk_ssm::operation::get_parameter::GetParameterOutput;

use crate::errors::AlertError;

/// Secret lookup used to resolve the Slack bot token.
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the parameter cannot be read or has no value.
    async fn get_parameter(&self, name: &str, decrypt: bool) -> Result<String, AlertError>;
}

/// SSM Parameter Store backed lookup.
pub struct SsmParameterStore {
    client: SsmClient,
}

impl SsmParameterStore {
    #[must_use]
    pub fn new(shared: &SdkConfig) -> Self {
        Self {
            client: SsmClient::new(shared),
        }
    }
}

#[async_trait]
impl ParameterStore for SsmParameterStore {
    async fn get_parameter(&self, name: &str, decrypt: bool) -> Result<String, AlertError> {
        let resp = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(decrypt)
            .send()
            .await?;

        parameter_value(&resp, name)
    }
}

fn parameter_value(resp: &GetParameterOutput, name: &str) -> Result<String, AlertError> {
    resp.parameter()
        .and_then(|param| param.value())
        .map(str::to_string)
        .ok_or_else(|| AlertError::AwsError(format!("ssm parameter {name} has no value")))
}
