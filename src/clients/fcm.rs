use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    error::{NotifyError, Result},
    models::{
        fcm::{FcmPayload, FcmResponse},
        notification::NotificationRequest,
        validation::validate_request,
    },
    report,
};

const FCM_SEND_URL: &str = "https://fcm.googleapis.com/fcm/send";
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug)]
pub struct FcmClient {
    http_client: Client,
    endpoint: String,
    server_key: String,
}

impl FcmClient {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_endpoint(config, FCM_SEND_URL)
    }

    // Primarily for tests that point the client at a local mock server.
    pub fn with_endpoint(config: &Config, endpoint: impl Into<String>) -> Result<Self> {
        let server_key = match &config.fcm_server_key {
            Some(key) if !key.is_empty() => key.clone(),
            _ => {
                return Err(NotifyError::Config(
                    "FCM_SERVER_KEY not found. Set it in .env file or pass --server-key"
                        .to_string(),
                ));
            }
        };

        let http_client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|_| NotifyError::Config("Failed to create HTTP client".to_string()))?;

        let endpoint = endpoint.into();
        info!(endpoint = %endpoint, "FCM client initialized");

        Ok(Self {
            http_client,
            endpoint,
            server_key,
        })
    }

    pub async fn send(&self, request: &NotificationRequest) -> Result<FcmResponse> {
        validate_request(request)?;

        let payload = FcmPayload::from_request(request);

        println!("{}", report::render_request(request));

        debug!(
            to = %payload.to,
            kind = %request.kind,
            "Sending FCM push notification"
        );

        let response = match self
            .http_client
            .post(&self.endpoint)
            .header("Authorization", format!("key={}", self.server_key))
            .json(&payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                let message = e.to_string();
                println!("{}", report::render_failure(&message, None));
                return Err(NotifyError::Delivery(message));
            }
        };

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| NotifyError::Delivery(e.to_string()))?;

        if !status.is_success() {
            let reason = format!("FCM request failed with HTTP {}", status.as_u16());
            println!("{}", report::render_failure(&reason, Some(&body)));

            warn!(status = status.as_u16(), "FCM rejected the notification");
            return Err(NotifyError::Delivery(format!("{}: {}", reason, body)));
        }

        let parsed: FcmResponse =
            serde_json::from_str(&body).map_err(|e| NotifyError::ResponseFormat(e.to_string()))?;

        info!(
            status = status.as_u16(),
            "FCM push notification sent successfully"
        );
        println!("{}", report::render_success(status.as_u16(), &parsed));

        Ok(parsed)
    }
}
