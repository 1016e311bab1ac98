//! Application state for the gateway service.
//!
//! The only process-wide state is the backend client with its resolved
//! configuration. It is constructed once in `main` and injected into the
//! router, never reached through a module-level singleton.

use std::sync::Arc;

use valhalla_client::ValhallaClient;

/// Shared state handed to every axum handler.
///
/// Cheaply cloneable (`Arc` internally); share it via axum's `State`
/// extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    client: Arc<ValhallaClient>,
}

impl AppState {
    /// Wrap a configured backend client.
    pub fn new(client: ValhallaClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Access the backend client.
    pub fn client(&self) -> &ValhallaClient {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_clones_share_the_same_client() {
        let client = ValhallaClient::new("http://example:9999").unwrap();
        let state1 = AppState::new(client);
        let state2 = state1.clone();

        assert_eq!(state1.client().base_url(), state2.client().base_url());
    }
}
