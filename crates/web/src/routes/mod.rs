//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Login form
//! POST /login                  - Log in by username
//! GET  /logout                 - Clear the session
//!
//! # Stamp (requires login)
//! GET  /stamp                  - Stamp page
//! GET  /stamp.svg              - Stamp download
//!
//! # Roster admin (requires admin)
//! GET  /admin                  - Roster table and add form
//! POST /admin/add_user         - Add a roster entry
//! POST /admin/edit_user        - Edit a roster entry
//! POST /admin/delete_user      - Delete a roster entry
//! ```

pub mod admin;
pub mod auth;
pub mod stamp;

use axum::{
    Router,
    routing::{get, post},
};
use tower_sessions::Session;

use stampdesk_core::{Profile, Username};

use crate::config::CompanyConfig;
use crate::error::Result;
use crate::middleware::take_flashes;
use crate::models::{CurrentUser, Flash};
use crate::state::AppState;

/// Build the application routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(auth::index))
        .route("/login", post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/stamp", get(stamp::show))
        .route("/stamp.svg", get(stamp::download))
        .route("/admin", get(admin::index))
        .route("/admin/add_user", post(admin::add_user))
        .route("/admin/edit_user", post(admin::edit_user))
        .route("/admin/delete_user", post(admin::delete_user))
}

/// Data every page layout needs.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub company: CompanyConfig,
    pub current_user: Option<CurrentUser>,
    pub flashes: Vec<Flash>,
}

impl PageContext {
    /// Gather layout data, consuming any queued flash messages.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be read.
    pub async fn load(
        state: &AppState,
        session: &Session,
        current_user: Option<CurrentUser>,
    ) -> Result<Self> {
        Ok(Self {
            company: state.config().company.clone(),
            current_user,
            flashes: take_flashes(session).await?,
        })
    }
}

/// A directory entry as shown in tables and pickers.
#[derive(Debug, Clone)]
pub struct RosterRow {
    pub username: String,
    pub full_name: String,
    pub department: String,
    pub position: String,
    /// The reserved administrator cannot be deleted.
    pub protected: bool,
}

impl RosterRow {
    #[must_use]
    pub fn new(username: &Username, profile: Profile) -> Self {
        Self {
            username: username.to_string(),
            full_name: profile.full_name,
            department: profile.department,
            position: profile.position,
            protected: username.is_admin(),
        }
    }
}
