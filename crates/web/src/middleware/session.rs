//! Session middleware configuration.
//!
//! Sessions live in a moka-backed in-memory store. A record is evicted once
//! its server-side expiry passes, and the store never holds more than
//! `STAMPDESK_SESSION_CAPACITY` records, so abandoned anonymous sessions
//! cannot accumulate. Everything is lost on restart, together with the
//! directory the sessions point into.

use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_moka_store::MokaStore;

use crate::config::StampdeskConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "stampdesk_session";

/// Create the in-memory session store.
#[must_use]
pub fn create_session_store(config: &StampdeskConfig) -> MokaStore {
    MokaStore::new(Some(config.session_capacity))
}

/// Create the session layer.
///
/// The cookie lives until the browser closes.
#[must_use]
pub fn create_session_layer(config: &StampdeskConfig) -> SessionManagerLayer<MokaStore> {
    SessionManagerLayer::new(create_session_store(config))
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnSessionEnd)
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Strict)
        .with_http_only(true)
        .with_path("/")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::Session;

    use super::*;

    #[tokio::test]
    async fn test_store_keeps_and_drops_records() {
        let store = Arc::new(create_session_store(&StampdeskConfig::default()));

        let session = Session::new(None, store.clone(), None);
        session.insert("k", "v").await.unwrap();
        session.save().await.unwrap();
        let id = session.id().unwrap();

        let reloaded = Session::new(Some(id), store.clone(), None);
        assert_eq!(reloaded.get::<String>("k").await.unwrap().as_deref(), Some("v"));

        reloaded.flush().await.unwrap();
        let gone = Session::new(Some(id), store, None);
        assert!(gone.get::<String>("k").await.unwrap().is_none());
    }
}
