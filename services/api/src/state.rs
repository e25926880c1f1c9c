//! Shared Application State
//!
//! This module defines the `AppState` struct, which holds the read-only
//! catalog and configuration shared by every handler.

use crate::config::Config;
use advisor_core::Catalog;
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(catalog: Catalog, config: Config) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}
