//! Root application state: one domain tree, constructed once at boot.

use std::sync::Arc;

use crate::app::bootstrap::AppConfig;
use crate::domains::Domains;
use crate::domains::alert::AlertDomain;
use crate::domains::ui::UiDomain;

#[derive(Debug)]
pub struct State {
    pub domains: Domains,
    pub server_url: Arc<str>,
}

impl State {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            domains: Domains {
                ui: UiDomain::new(),
                alert: AlertDomain::new(config),
            },
            server_url: Arc::clone(&config.server_url),
        }
    }
}
