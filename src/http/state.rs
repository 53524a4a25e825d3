//! Application state for the HTTP handlers

use std::sync::Arc;

use crate::core::config::Config;
use crate::core::variant::Variant;

/// Shared, read-only state for Axum handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new AppState from configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Effective application configuration
    ///
    /// # Returns
    ///
    /// State sharing the config behind an `Arc`
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Convenience constructor for a default config with the given variant
    pub fn with_variant(variant: Variant) -> Self {
        let mut config = Config::default();
        config.service.variant = variant;
        Self::new(config)
    }

    /// Variant selected in the configuration
    pub fn variant(&self) -> Variant {
        self.config.service.variant
    }
}
