//! Alert message layout.
//!
//! Every alert is posted with the same two sections: a fixed header and the
//! generated message body, both rendered as Slack mrkdwn.

use slack_morphism::prelude::*;

/// Title shown above every alert.
pub const ALERT_TITLE: &str = "AWS CloudTrail Alert";

fn markdown_section(text: String) -> SlackBlock {
    SlackBlock::Section(
        SlackSectionBlock::new().with_text(SlackBlockText::MarkDown(SlackBlockMarkDownText::new(
            text,
        ))),
    )
}

/// Plain-text fallback shown in notifications and clients without block support.
#[must_use]
pub fn alert_fallback_text(message: &str) -> String {
    format!("{ALERT_TITLE}\n{message}")
}

/// Header block followed by the message body.
#[must_use]
pub fn alert_blocks(message: &str) -> Vec<SlackBlock> {
    vec![
        markdown_section(format!("*{ALERT_TITLE}*")),
        markdown_section(message.to_string()),
    ]
}

/// Build the `chat.postMessage` request for `message` in `channel`.
///
/// # Examples
///
/// ```
/// use resource_change_alert::slack::message_builder::build_alert_request;
///
/// let request = build_alert_request("#security-alerts", "*Event summary*\nA user was created");
/// assert_eq!(request.channel.0, "#security-alerts");
/// ```
#[must_use]
pub fn build_alert_request(channel: &str, message: &str) -> SlackApiChatPostMessageRequest {
    SlackApiChatPostMessageRequest::new(
        SlackChannelId(channel.to_string()),
        SlackMessageContent::new()
            .with_text(alert_fallback_text(message))
            .with_blocks(alert_blocks(message)),
    )
}
