pub mod errors;
pub mod flow;
pub mod location;
pub mod messages;
pub mod service;
pub mod update;

use std::fmt;
use std::sync::Arc;

use crate::app::bootstrap::AppConfig;
use flow::SosFlow;
use location::{GeoIpLocator, LocationProvider, LocationQuery};
use service::{AlertGateway, HttpAlertGateway};

pub struct AlertDomain {
    pub state: AlertState,
}

impl AlertDomain {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            state: AlertState::new(config),
        }
    }
}

impl fmt::Debug for AlertDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertDomain")
            .field("state", &self.state)
            .finish()
    }
}

pub struct AlertState {
    pub flow: SosFlow,
    /// Bumped on every flow start and every terminal transition; async
    /// completions carry the generation they were spawned under and are
    /// dropped when it no longer matches.
    pub generation: u64,
    pub gateway: Arc<dyn AlertGateway>,
    /// `None` when the environment has no positioning support.
    pub locator: Option<Arc<dyn LocationProvider>>,
    pub locate_query: LocationQuery,
}

impl AlertState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            flow: SosFlow::Idle,
            generation: 0,
            gateway: Arc::new(HttpAlertGateway::new(Arc::clone(&config.server_url))),
            locator: config.geoip_url.as_ref().map(|endpoint| {
                Arc::new(GeoIpLocator::new(Arc::clone(endpoint))) as Arc<dyn LocationProvider>
            }),
            locate_query: LocationQuery {
                high_accuracy: true,
                timeout: config.locate_timeout,
            },
        }
    }
}

impl fmt::Debug for AlertState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertState")
            .field("flow", &self.flow)
            .field("generation", &self.generation)
            .field("has_locator", &self.locator.is_some())
            .field("locate_query", &self.locate_query)
            .finish_non_exhaustive()
    }
}
