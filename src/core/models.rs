use serde::{Deserialize, Serialize};

pub const STATUS_OK: u16 = 200;
pub const STATUS_ERROR: u16 = 500;

/// Outcome returned to the Lambda caller for every invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationResult {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub message: String,
}

impl NotificationResult {
    #[must_use]
    pub fn delivered() -> Self {
        Self {
            status_code: STATUS_OK,
            message: "delivered".to_string(),
        }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status_code: STATUS_ERROR,
            message: message.into(),
        }
    }
}
