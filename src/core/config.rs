use std::collections::HashMap;
use std::env;

use crate::errors::AlertError;

pub const SLACK_TOKEN_PARAM: &str = "SLACK_TOKEN_PARAM";
pub const SLACK_CHANNEL: &str = "SLACK_CHANNEL";
pub const BEDROCK_REGION: &str = "BEDROCK_REGION";
pub const BEDROCK_MODEL_ID: &str = "BEDROCK_MODEL_ID";
pub const SUMMARY_LANGUAGE: &str = "SUMMARY_LANGUAGE";
pub const SUMMARY_TIMEZONE: &str = "SUMMARY_TIMEZONE";

/// Settings that must be present before any external call is made, in check order.
pub const REQUIRED_VARS: [&str; 4] = [
    SLACK_TOKEN_PARAM,
    SLACK_CHANNEL,
    BEDROCK_REGION,
    BEDROCK_MODEL_ID,
];

pub const DEFAULT_SUMMARY_LANGUAGE: &str = "Japanese";
pub const DEFAULT_SUMMARY_TIMEZONE: &str = "JST";

/// Key/value lookup the configuration is read from.
pub trait ConfigSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads settings from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

impl ConfigSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub slack_token_param: String,
    pub slack_channel: String,
    pub bedrock_region: String,
    pub bedrock_model_id: String,
    pub summary_language: String,
    pub summary_timezone: String,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `AlertError::ConfigError` naming the first required key that is
    /// missing or blank.
    pub fn from_source<S: ConfigSource + ?Sized>(source: &S) -> Result<Self, AlertError> {
        // Field order follows REQUIRED_VARS so the first missing key is reported.
        Ok(Self {
            slack_token_param: require(source, SLACK_TOKEN_PARAM)?,
            slack_channel: require(source, SLACK_CHANNEL)?,
            bedrock_region: require(source, BEDROCK_REGION)?,
            bedrock_model_id: require(source, BEDROCK_MODEL_ID)?,
            summary_language: optional(source, SUMMARY_LANGUAGE)
                .unwrap_or_else(|| DEFAULT_SUMMARY_LANGUAGE.to_string()),
            summary_timezone: optional(source, SUMMARY_TIMEZONE)
                .unwrap_or_else(|| DEFAULT_SUMMARY_TIMEZONE.to_string()),
        })
    }
}

fn optional<S: ConfigSource + ?Sized>(source: &S, key: &str) -> Option<String> {
    source.get(key).filter(|v| !v.trim().is_empty())
}

fn require<S: ConfigSource + ?Sized>(source: &S, key: &str) -> Result<String, AlertError> {
    optional(source, key).ok_or_else(|| AlertError::ConfigError(key.to_string()))
}
