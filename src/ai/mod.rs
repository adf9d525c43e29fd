//! All AI/LLM functionality

pub mod client;
pub mod prompt_builder;
pub mod summarize;

// Re-export main types for convenience
pub use client::{BedrockModelClient, ModelClient};
pub use summarize::{SummaryOptions, SummaryOutcome, generate_notification_message};
