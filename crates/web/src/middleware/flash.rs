//! Flash message helpers.
//!
//! Messages are queued in the session and consumed by the next page that
//! renders them, so each one is shown once.

use tower_sessions::Session;

use crate::models::{Flash, session_keys};

/// Queue a flash message for the next rendered page.
///
/// # Errors
///
/// Returns an error if the session cannot be read or modified.
pub async fn push_flash(
    session: &Session,
    flash: Flash,
) -> Result<(), tower_sessions::session::Error> {
    let mut flashes: Vec<Flash> = session.get(session_keys::FLASH).await?.unwrap_or_default();
    flashes.push(flash);
    session.insert(session_keys::FLASH, flashes).await
}

/// Remove and return all queued flash messages, oldest first.
///
/// # Errors
///
/// Returns an error if the session cannot be read or modified.
pub async fn take_flashes(session: &Session) -> Result<Vec<Flash>, tower_sessions::session::Error> {
    Ok(session
        .remove::<Vec<Flash>>(session_keys::FLASH)
        .await?
        .unwrap_or_default())
}
