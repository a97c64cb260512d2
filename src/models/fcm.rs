use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::notification::NotificationRequest;

const CLICK_ACTION: &str = "FLUTTER_NOTIFICATION_CLICK";
const DEFAULT_SOUND: &str = "default";
const DEFAULT_BADGE: &str = "1";

#[derive(Debug, Clone, Serialize)]
pub struct FcmPayload {
    pub to: String,
    pub notification: FcmNotification,
    pub data: Map<String, Value>,
    pub priority: String,
    pub content_available: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FcmNotification {
    pub title: String,
    pub body: String,
    pub sound: String,
    // The legacy API expects badge as a string, not a number.
    pub badge: String,
}

impl FcmPayload {
    pub fn from_request(request: &NotificationRequest) -> Self {
        let mut data = Map::new();
        data.insert("type".to_string(), Value::String(request.kind.to_string()));
        data.insert(
            "click_action".to_string(),
            Value::String(CLICK_ACTION.to_string()),
        );

        // Caller-supplied keys override the defaults above.
        data.extend(request.extra_data.clone());

        Self {
            to: request.target.to_field(),
            notification: FcmNotification {
                title: request.title.clone(),
                body: request.body.clone(),
                sound: DEFAULT_SOUND.to_string(),
                badge: DEFAULT_BADGE.to_string(),
            },
            data,
            priority: "high".to_string(),
            content_available: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FcmResponse {
    pub message_id: Option<MessageId>,
    pub success: Option<u32>,
    pub failure: Option<u32>,
    pub results: Option<Vec<FcmDeliveryResult>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FcmDeliveryResult {
    pub message_id: Option<MessageId>,
    pub error: Option<String>,
}

// Token sends report string ids per recipient; topic sends report one numeric id.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MessageId {
    Number(u64),
    Text(String),
}

impl Display for MessageId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            MessageId::Number(id) => write!(f, "{}", id),
            MessageId::Text(id) => write!(f, "{}", id),
        }
    }
}
