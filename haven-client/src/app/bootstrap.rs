use std::sync::Arc;
use std::time::Duration;

use iced::Task;
use url::Url;

use crate::common::messages::DomainMessage;
use crate::state::State;

const DEFAULT_SERVER_URL: &str = "http://localhost:8000";
const DEFAULT_GEOIP_URL: &str = "http://ip-api.com/json";
const DEFAULT_LOCATE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_url: Arc<str>,
    /// Positioning endpoint; `None` means the environment has no
    /// positioning support and the SOS flow goes straight to manual entry.
    pub geoip_url: Option<Arc<str>>,
    pub locate_timeout: Duration,
}

impl AppConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: Arc::from(server_url.into()),
            geoip_url: Some(Arc::from(DEFAULT_GEOIP_URL)),
            locate_timeout: DEFAULT_LOCATE_TIMEOUT,
        }
    }

    pub fn from_environment() -> Self {
        let mut server_url = std::env::var("HAVEN_SERVER_URL")
            .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        if let Err(err) = Url::parse(&server_url) {
            log::warn!(
                "[Boot] HAVEN_SERVER_URL {server_url:?} is not a valid URL ({err}), \
                 falling back to {DEFAULT_SERVER_URL}"
            );
            server_url = DEFAULT_SERVER_URL.to_string();
        }

        let geoip_url = match std::env::var("HAVEN_GEOIP_URL") {
            Ok(value) => {
                let normalized = value.trim().to_ascii_lowercase();
                if matches!(normalized.as_str(), "off" | "0" | "disabled" | "none") {
                    None
                } else {
                    Some(Arc::from(value))
                }
            }
            Err(_) => Some(Arc::from(DEFAULT_GEOIP_URL)),
        };

        let locate_timeout = std::env::var("HAVEN_LOCATE_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_LOCATE_TIMEOUT);

        Self {
            server_url: Arc::from(server_url),
            geoip_url,
            locate_timeout,
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn without_positioning(mut self) -> Self {
        self.geoip_url = None;
        self
    }
}

/// Boot logic for the running application, returning the initial state
/// and task batch.
pub fn runtime_boot(config: &AppConfig) -> (State, Task<DomainMessage>) {
    let state = State::new(config);

    log::info!("[Boot] alert endpoint: {}", config.server_url());
    match &config.geoip_url {
        Some(url) => log::info!("[Boot] positioning endpoint: {url}"),
        None => log::info!("[Boot] positioning disabled; SOS will use manual entry"),
    }

    (state, Task::none())
}
