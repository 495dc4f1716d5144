use std::sync::Arc;

use viewfinder_core::search::SearchConfig;
use viewfinder_core::{Config, PhotoProvider, SanitizedConfig};

/// Shared application state
pub struct AppState {
    config: Config,
    provider: Option<Arc<dyn PhotoProvider>>,
}

impl AppState {
    pub fn new(config: Config, provider: Option<Arc<dyn PhotoProvider>>) -> Self {
        Self { config, provider }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    /// The configured upstream photo provider, if any.
    pub fn provider(&self) -> Option<Arc<dyn PhotoProvider>> {
        self.provider.clone()
    }

    pub fn search_config(&self) -> SearchConfig {
        self.config.search.clone()
    }
}
