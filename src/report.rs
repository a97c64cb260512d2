//! Console output for the request echo and delivery outcome

use serde_json::Value;

use crate::models::{
    fcm::FcmResponse,
    notification::{NotificationRequest, Target},
};

const RULE_WIDTH: usize = 60;

fn heavy_rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn light_rule() -> String {
    "-".repeat(RULE_WIDTH)
}

pub fn render_request(request: &NotificationRequest) -> String {
    let mut out = String::new();
    out.push_str(&heavy_rule());
    out.push('\n');

    match &request.target {
        Target::Token(token) => {
            out.push_str("Sending notification to FCM...\n");
            out.push_str(&light_rule());
            out.push('\n');
            out.push_str(&format!("Token: {}\n", preview_token(token)));
        }
        Target::Topic(topic) => {
            out.push_str(&format!("Sending notification to topic: {}\n", topic));
            out.push_str(&light_rule());
            out.push('\n');
        }
    }

    out.push_str(&format!("Title: {}\n", request.title));
    out.push_str(&format!("Message: {}\n", request.body));
    out.push_str(&format!("Type: {}\n", request.kind));

    if !request.extra_data.is_empty() {
        out.push_str(&format!(
            "Extra Data: {}\n",
            Value::Object(request.extra_data.clone())
        ));
    }

    out.push_str(&heavy_rule());
    out
}

pub fn render_success(status: u16, response: &FcmResponse) -> String {
    let mut out = String::from("\n✅ SUCCESS!\n");
    out.push_str(&light_rule());
    out.push('\n');
    out.push_str(&format!("Status Code: {}\n", status));

    let message_id = response
        .message_id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    out.push_str(&format!("Message ID: {}\n", message_id));
    out.push_str(&format!(
        "Success Count: {}\n",
        response.success.unwrap_or(0)
    ));
    out.push_str(&format!(
        "Failure Count: {}\n",
        response.failure.unwrap_or(0)
    ));

    if let Some(results) = &response.results {
        for (idx, result) in results.iter().enumerate() {
            let id = result
                .message_id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_else(|| "N/A".to_string());

            out.push_str(&format!("\nResult {}:\n", idx + 1));
            out.push_str(&format!("  Message ID: {}\n", id));

            if let Some(error) = &result.error {
                out.push_str(&format!("  Error: {}\n", error));
            }
        }
    }

    out.push_str(&heavy_rule());
    out
}

pub fn render_failure(message: &str, body: Option<&str>) -> String {
    let mut out = String::from("\n");
    out.push_str(&format!("❌ ERROR: {}", message));

    if let Some(body) = body {
        out.push_str(&format!("\nResponse: {}", body));
    }

    out
}

// Long device tokens are echoed abbreviated so they stay on one line.
pub fn preview_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 40 {
        return token.to_string();
    }

    let head: String = chars[..20].iter().collect();
    let tail: String = chars[chars.len() - 20..].iter().collect();
    format!("{}...{}", head, tail)
}
