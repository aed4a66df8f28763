//! HTTP gateway to the alert backend.
//!
//! A 2xx answer means the alert was delivered, whatever the body says;
//! failure bodies are mined for a `message` field so the user sees the
//! server's own words when it has any.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use haven_model::{SosAlertAck, SosAlertRequest};

use crate::domains::alert::errors::AlertError;

#[async_trait]
pub trait AlertGateway: Send + Sync {
    async fn send_alert(&self, request: &SosAlertRequest) -> Result<SosAlertAck, AlertError>;
}

#[derive(Debug, Clone)]
pub struct HttpAlertGateway {
    client: Client,
    base_url: Arc<str>,
}

impl HttpAlertGateway {
    pub fn new(base_url: impl Into<Arc<str>>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        let base_url = base_url.into();
        log::info!("[Api] alert gateway targeting {base_url}");

        Self { client, base_url }
    }

    fn alert_url(&self) -> String {
        format!("{}/api/sos-alert/", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl AlertGateway for HttpAlertGateway {
    async fn send_alert(&self, request: &SosAlertRequest) -> Result<SosAlertAck, AlertError> {
        let response = self
            .client
            .post(self.alert_url())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status.is_success() {
            let ack = ack_from_body(&body);
            log::info!("[Api] alert delivered (id: {:?})", ack.id);
            Ok(ack)
        } else {
            log::warn!("[Api] alert rejected with {status}");
            Err(AlertError::Rejected {
                status,
                message: rejection_message(&body),
            })
        }
    }
}

/// Parse an acknowledgement, tolerating empty or malformed bodies.
fn ack_from_body(body: &str) -> SosAlertAck {
    serde_json::from_str(body).unwrap_or_default()
}

/// Pull the server-provided failure detail out of an error body, if any.
fn rejection_message(body: &str) -> Option<String> {
    serde_json::from_str::<SosAlertAck>(body)
        .ok()
        .and_then(|ack| ack.message)
        .filter(|message| !message.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_url_normalizes_trailing_slashes() {
        let gateway = HttpAlertGateway::new("http://localhost:8000/");
        assert_eq!(gateway.alert_url(), "http://localhost:8000/api/sos-alert/");

        let gateway = HttpAlertGateway::new("http://localhost:8000");
        assert_eq!(gateway.alert_url(), "http://localhost:8000/api/sos-alert/");
    }

    #[test]
    fn acks_tolerate_malformed_bodies() {
        assert_eq!(ack_from_body(""), SosAlertAck::default());
        assert_eq!(ack_from_body("<html>oops</html>"), SosAlertAck::default());

        let ack = ack_from_body(r#"{"status":"success","message":"Alert received","id":12}"#);
        assert_eq!(ack.id, Some(12));
    }

    #[test]
    fn rejection_detail_comes_from_the_message_field() {
        assert_eq!(
            rejection_message(r#"{"status":"error","message":"server overloaded"}"#),
            Some("server overloaded".to_string())
        );
        assert_eq!(rejection_message(r#"{"status":"error","message":""}"#), None);
        assert_eq!(rejection_message("unparseable"), None);
    }
}
