//! Delivery of a generated message to the alert channel.

use tracing::{debug, error, info};

use super::client::{ChatClient, PostMessageAck};
use super::message_builder::build_alert_request;
use crate::core::models::NotificationResult;
use crate::core::parameters::ParameterStore;
use crate::errors::AlertError;

/// Builds a chat client from a resolved bot token.
pub trait ChatConnector: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the client cannot be constructed.
    fn connect(&self, token: String) -> Result<Box<dyn ChatClient>, AlertError>;
}

/// Where and with which credential the alert is posted.
#[derive(Debug, Clone)]
pub struct DeliveryTarget {
    pub token_param: String,
    pub channel: String,
}

async fn post_alert(
    params: &dyn ParameterStore,
    connector: &dyn ChatConnector,
    target: &DeliveryTarget,
    message: &str,
) -> Result<PostMessageAck, AlertError> {
    let token = params.get_parameter(&target.token_param, true).await?;
    let client = connector.connect(token)?;
    let request = build_alert_request(&target.channel, message);
    client.post_message(&request).await
}

/// Post `message` to the configured channel exactly once and map the outcome.
///
/// Never fails: token lookup, client construction and post errors all become
/// a 500 result carrying the error detail.
pub async fn send_slack_notification(
    params: &dyn ParameterStore,
    connector: &dyn ChatConnector,
    target: &DeliveryTarget,
    message: &str,
) -> NotificationResult {
    debug!("{}", message);

    match post_alert(params, connector, target, message).await {
        Ok(ack) if ack.ok => {
            info!(channel = %target.channel, "Slack notification delivered");
            NotificationResult::delivered()
        }
        Ok(ack) => {
            let detail = ack.error.unwrap_or_default();
            error!(channel = %target.channel, error = %detail, "Slack notification rejected");
            if detail.is_empty() {
                NotificationResult::failure("delivery failed")
            } else {
                NotificationResult::failure(format!("delivery failed: {detail}"))
            }
        }
        Err(e) => {
            error!(channel = %target.channel, "Slack notification error: {:?}", e);
            NotificationResult::failure(format!("Slack notification error: {e}"))
        }
    }
}
