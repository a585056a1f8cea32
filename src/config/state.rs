// Application state module
// Shared by every connection for the lifetime of the server

use super::types::Config;
use crate::gallery::{JsonFileStore, VisitorCounter};

/// Application state
pub struct AppState {
    pub config: Config,

    /// Visitor counter bound to the configured stats file
    pub visitors: VisitorCounter<JsonFileStore>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            visitors: VisitorCounter::new(JsonFileStore::new(&config.gallery.stats_file)),
            config: config.clone(),
        }
    }
}
