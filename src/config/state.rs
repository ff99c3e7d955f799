// Application state module
// Immutable state shared by every request handler

use super::types::Config;

/// Application state
///
/// Built once at startup and shared behind an `Arc`; nothing here is
/// mutated after construction, so handlers never coordinate.
pub struct AppState {
    pub config: Config,
    /// One HTTP client reused for all outbound fetches (connection pooling)
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}
