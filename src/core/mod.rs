//! Configuration, event and result types shared by the pipeline

pub mod config;
pub mod event;
pub mod models;
pub mod parameters;

pub use config::AppConfig;
pub use event::extract_audit_event;
pub use models::NotificationResult;
