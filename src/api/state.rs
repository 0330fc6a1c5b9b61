//! Shared application state

use std::sync::Arc;

use crate::config::AppConfig;
use crate::store::EventRepository;

/// State shared by every request handler
pub struct AppState {
    /// Event storage
    pub repo: Arc<dyn EventRepository>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(repo: Arc<dyn EventRepository>, config: AppConfig) -> Self {
        Self { repo, config }
    }

    /// Absolute URL for a site-relative path
    pub fn absolute_url(&self, path: &str) -> String {
        self.config.feed.absolute_url(path)
    }
}
