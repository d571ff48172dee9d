//! Session identity extractors.
//!
//! Provides extractors for requiring a logged-in visitor or the administrator
//! in route handlers.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{Method, StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;
use tower_sessions::Session;

use crate::models::{CurrentUser, Flash, session_keys};
use crate::services::{require_admin, require_session};

use super::flash::push_flash;

/// Message shown when a visitor opens the admin panel without the admin flag.
const ADMIN_REQUIRED_MESSAGE: &str = "Access denied. Admin privileges required.";

async fn current_user(parts: &Parts) -> Option<CurrentUser> {
    let session = parts.extensions.get::<Session>()?;
    session
        .get::<CurrentUser>(session_keys::CURRENT_USER)
        .await
        .ok()
        .flatten()
}

/// Extractor that requires a logged-in visitor.
///
/// If nobody is logged in, redirects to the login page.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireUser(user): RequireUser,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", user.profile.full_name)
/// }
/// ```
pub struct RequireUser(pub CurrentUser);

/// Rejection for [`RequireUser`]: back to the login page.
pub struct LoginRedirect;

impl IntoResponse for LoginRedirect {
    fn into_response(self) -> Response {
        Redirect::to("/").into_response()
    }
}

impl<S> FromRequestParts<S> for RequireUser
where
    S: Send + Sync,
{
    type Rejection = LoginRedirect;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        require_session(current_user(parts).await)
            .map(Self)
            .map_err(|_| LoginRedirect)
    }
}

/// Extractor that optionally gets the current visitor.
///
/// Unlike `RequireUser`, this does not reject the request if nobody is logged in.
pub struct OptionalUser(pub Option<CurrentUser>);

impl<S> FromRequestParts<S> for OptionalUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(current_user(parts).await))
    }
}

/// Extractor that requires the administrator.
///
/// Page loads (`GET`) are sent back to the login page with an "Access denied"
/// flash. Form submissions get a bare 403 so no mutation is attempted and no
/// redirect is revealed.
pub struct RequireAdmin(pub CurrentUser);

/// Error returned when the administrator is required.
#[derive(Debug, PartialEq, Eq)]
pub enum AdminRejection {
    /// Redirect to the login page (page loads).
    RedirectToLogin,
    /// 403 with a JSON error body (form submissions).
    Forbidden,
}

impl IntoResponse for AdminRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/").into_response(),
            Self::Forbidden => (
                StatusCode::FORBIDDEN,
                Json(json!({ "error": "Access denied" })),
            )
                .into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AdminRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = current_user(parts).await;
        if let Ok(admin) = require_admin(user.as_ref()) {
            return Ok(Self(admin.clone()));
        }

        tracing::warn!(
            username = user.as_ref().map(|u| u.username.as_str()),
            path = %parts.uri.path(),
            "Admin access denied"
        );

        if parts.method != Method::GET {
            return Err(AdminRejection::Forbidden);
        }

        if let Some(session) = parts.extensions.get::<Session>() {
            if let Err(e) = push_flash(session, Flash::error(ADMIN_REQUIRED_MESSAGE)).await {
                tracing::error!("Failed to queue flash: {}", e);
            }
        }

        Err(AdminRejection::RedirectToLogin)
    }
}

/// Helper to store the visitor identity in the session (login).
///
/// The session id is rotated first so a pre-login cookie cannot be reused.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user: &CurrentUser,
) -> Result<(), tower_sessions::session::Error> {
    session.cycle_id().await?;
    session.insert(session_keys::CURRENT_USER, user).await
}

/// Helper to clear all session state (logout).
///
/// Safe to call without a logged-in visitor.
///
/// # Errors
///
/// Returns an error if the session store cannot be updated.
pub async fn clear_current_user(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.flush().await
}
