//! All Slack-specific functionality

pub mod client;
pub mod message_builder;
pub mod notify;

// Re-export main types for convenience
pub use client::{ChatClient, PostMessageAck, SlackClient};
pub use notify::{ChatConnector, DeliveryTarget, send_slack_notification};
