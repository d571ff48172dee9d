//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StampdeskConfig;
use crate::directory::DirectoryStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the user directory.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StampdeskConfig,
    directory: DirectoryStore,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Stampdesk configuration
    /// * `directory` - The user directory, usually [`DirectoryStore::seeded`]
    #[must_use]
    pub fn new(config: StampdeskConfig, directory: DirectoryStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, directory }),
        }
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &StampdeskConfig {
        &self.inner.config
    }

    /// Get a reference to the user directory.
    #[must_use]
    pub fn directory(&self) -> &DirectoryStore {
        &self.inner.directory
    }
}
