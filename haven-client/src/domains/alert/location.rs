//! Position acquisition
//!
//! `LocationProvider` is the seam between the SOS flow and whatever can
//! produce a position in the current environment. The production
//! implementation asks a GeoIP-style HTTP endpoint; tests substitute a
//! mock. `acquire_position` bounds any provider with the query deadline.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use haven_model::Position;

use crate::domains::alert::errors::LocationError;

/// Options for a position acquisition attempt.
#[derive(Debug, Clone)]
pub struct LocationQuery {
    pub high_accuracy: bool,
    pub timeout: Duration,
}

impl Default for LocationQuery {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(10),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn locate(&self, query: &LocationQuery) -> Result<Position, LocationError>;
}

/// Run a provider under the query deadline.
pub async fn acquire_position(
    provider: Arc<dyn LocationProvider>,
    query: LocationQuery,
) -> Result<Position, LocationError> {
    match tokio::time::timeout(query.timeout, provider.locate(&query)).await {
        Ok(result) => result,
        Err(_) => Err(LocationError::Timeout),
    }
}

/// Coarse positioning over an ip-api style endpoint.
#[derive(Debug, Clone)]
pub struct GeoIpLocator {
    client: reqwest::Client,
    endpoint: Arc<str>,
}

impl GeoIpLocator {
    pub fn new(endpoint: impl Into<Arc<str>>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl LocationProvider for GeoIpLocator {
    async fn locate(&self, query: &LocationQuery) -> Result<Position, LocationError> {
        log::debug!(
            "[Locate] querying {} (high_accuracy: {})",
            self.endpoint,
            query.high_accuracy
        );

        let response = self
            .client
            .get(self.endpoint.as_ref())
            .send()
            .await
            .map_err(|err| LocationError::Unavailable(err.to_string()))?;

        if response.status() == reqwest::StatusCode::FORBIDDEN {
            return Err(LocationError::Denied);
        }

        let body = response
            .text()
            .await
            .map_err(|err| LocationError::Unavailable(err.to_string()))?;

        decode_position(&body).map_err(|err| LocationError::Unavailable(err.to_string()))
    }
}

fn decode_position(body: &str) -> anyhow::Result<Position> {
    #[derive(Deserialize)]
    struct GeoIpBody {
        status: Option<String>,
        message: Option<String>,
        lat: Option<f64>,
        lon: Option<f64>,
    }

    let body: GeoIpBody = serde_json::from_str(body)?;

    if body.status.as_deref() == Some("fail") {
        anyhow::bail!(
            "{}",
            body.message.unwrap_or_else(|| "lookup failed".to_owned())
        );
    }

    match (body.lat, body.lon) {
        (Some(latitude), Some(longitude)) => Ok(Position::new(latitude, longitude)),
        _ => anyhow::bail!("response carries no coordinates"),
    }
}
