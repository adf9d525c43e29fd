use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlertError {
    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to invoke Bedrock model: {0}")]
    ModelError(String),

    #[error("Invalid Bedrock response structure: {0}")]
    InvalidResponse(String),

    #[error("Failed to access Slack API: {0}")]
    SlackApiError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to interact with AWS services: {0}")]
    AwsError(String),

    #[error("Failed to serialize JSON: {0}")]
    SerializationError(String),
}

impl From<reqwest::Error> for AlertError {
    fn from(error: reqwest::Error) -> Self {
        AlertError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for AlertError {
    fn from(error: serde_json::Error) -> Self {
        AlertError::SerializationError(error.to_string())
    }
}

// Generic implementation for AWS SDK errors
impl<E, R> From<aws_sdk_ssm::error::SdkError<E, R>> for AlertError
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    fn from(error: aws_sdk_ssm::error::SdkError<E, R>) -> Self {
        AlertError::AwsError(aws_sdk_ssm::error::DisplayErrorContext(&error).to_string())
    }
}
