//! Error types for the notification sender

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Delivery failed: {0}")]
    Delivery(String),

    #[error("Malformed FCM response: {0}")]
    ResponseFormat(String),
}

pub type Result<T> = std::result::Result<T, NotifyError>;
