//! Login and logout route handlers.
//!
//! There are no passwords: a visitor logs in by naming a roster entry.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::Result;
use crate::filters;
use crate::middleware::{OptionalUser, clear_current_user, set_current_user};
use crate::models::Flash;
use crate::services::{LoginError, SessionManager};
use crate::state::AppState;

use super::{PageContext, RosterRow};

/// Message shown for an unknown login name.
const USER_NOT_FOUND_MESSAGE: &str =
    "User not found. Please contact administrator or use valid credentials.";

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub page: PageContext,
    /// Name typed on the failed attempt, echoed back into the form.
    pub attempted: String,
    /// Roster offered after a failed attempt.
    pub available_users: Vec<RosterRow>,
}

/// Display the login page.
///
/// GET /
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    OptionalUser(user): OptionalUser,
) -> Result<LoginTemplate> {
    Ok(LoginTemplate {
        page: PageContext::load(&state, &session, user).await?,
        attempted: String::new(),
        available_users: Vec::new(),
    })
}

/// Handle login form submission.
///
/// POST /login
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    match SessionManager::new(state.directory()).login(&form.username) {
        Ok(user) => {
            set_current_user(&session, &user).await?;
            Ok(Redirect::to("/stamp").into_response())
        }
        Err(LoginError::NotFound { available }) => {
            let available_users = available
                .iter()
                .filter_map(|username| {
                    let profile = state.directory().get(username)?;
                    Some(RosterRow::new(username, profile))
                })
                .collect();

            let mut page = PageContext::load(&state, &session, None).await?;
            page.flashes.push(Flash::error(USER_NOT_FOUND_MESSAGE));

            Ok(LoginTemplate {
                page,
                attempted: form.username.trim().to_string(),
                available_users,
            }
            .into_response())
        }
    }
}

/// Clear the session and return to the login page.
///
/// GET /logout
pub async fn logout(session: Session) -> impl IntoResponse {
    if let Err(e) = clear_current_user(&session).await {
        tracing::error!("Failed to clear session: {}", e);
    }

    Redirect::to("/")
}
