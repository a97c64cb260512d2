use std::fmt::{Display, Formatter, Result as FmtResult};

use clap::ValueEnum;
use serde_json::{Map, Value};

use crate::error::{NotifyError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NotificationKind {
    Info,
    Warning,
    Success,
    Event,
    Announcement,
}

impl Display for NotificationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            NotificationKind::Info => write!(f, "info"),
            NotificationKind::Warning => write!(f, "warning"),
            NotificationKind::Success => write!(f, "success"),
            NotificationKind::Event => write!(f, "event"),
            NotificationKind::Announcement => write!(f, "announcement"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Token(String),
    Topic(String),
}

impl Target {
    pub fn from_cli(token: Option<String>, topic: Option<String>) -> Option<Self> {
        match (token, topic) {
            (Some(token), None) => Some(Target::Token(token)),
            (None, Some(topic)) => Some(Target::Topic(topic)),
            _ => None,
        }
    }

    pub fn to_field(&self) -> String {
        match self {
            Target::Token(token) => token.clone(),
            Target::Topic(topic) => format!("/topics/{}", topic),
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Target::Token(token) => token,
            Target::Topic(topic) => topic,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NotificationRequest {
    pub target: Target,
    pub title: String,
    pub body: String,
    pub kind: NotificationKind,
    pub extra_data: Map<String, Value>,
}

pub fn parse_extra_data(raw: &str) -> Result<Map<String, Value>> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| NotifyError::InvalidArgument(format!("Invalid JSON in data: {}", e)))?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(NotifyError::InvalidArgument(
            "Data must be a JSON object".to_string(),
        )),
    }
}
