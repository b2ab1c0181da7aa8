//! Application Context
//!
//! Backend configuration and client, provided once via the Leptos Context API.

use std::sync::Arc;

use crate::api::{HttpItemsApi, ItemsApi};
use crate::config::AppConfig;

/// App-wide dependencies injected at construction
#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    /// Backend client used by the main view
    pub api: Arc<dyn ItemsApi>,
}

impl AppContext {
    pub fn new(config: AppConfig, api: Arc<dyn ItemsApi>) -> Self {
        Self { config, api }
    }

    /// Context talking HTTP to `config.backend_url`
    pub fn from_config(config: AppConfig) -> Self {
        let api = Arc::new(HttpItemsApi::new(config.clone()));
        Self::new(config, api)
    }
}
