//! Stamp page and download handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::{
        HeaderValue,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use stampdesk_core::Username;

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::RequireUser;
use crate::models::CurrentUser;
use crate::stamp::{self as renderer, StampRequest};
use crate::state::AppState;

use super::PageContext;

/// Stamp page template.
#[derive(Template, WebTemplate)]
#[template(path = "stamp.html")]
pub struct StampPageTemplate {
    pub page: PageContext,
    pub user: CurrentUser,
    pub date: String,
    /// Pre-rendered, already escaped SVG markup.
    pub stamp_svg: String,
}

/// Today's date as printed on stamps.
fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Attachment file name for a stamp download.
///
/// Characters outside `[a-z0-9_-]` become `_` so the quoted header value
/// stays well-formed for any username.
fn download_file_name(username: &Username, date: &str) -> String {
    let safe: String = username
        .as_str()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("stamp-{safe}-{date}.svg")
}

/// Render the stamp SVG for a session identity.
fn render_for(state: &AppState, user: &CurrentUser, date: &str) -> Result<String> {
    let svg = renderer::render(&StampRequest {
        company: &state.config().company.name,
        full_name: &user.profile.full_name,
        department: &user.profile.department,
        position: &user.profile.position,
        date,
    })
    .render()?;
    Ok(svg)
}

/// Show the visitor's stamp.
///
/// GET /stamp
pub async fn show(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
    session: Session,
) -> Result<StampPageTemplate> {
    let date = today();
    let stamp_svg = render_for(&state, &user, &date)?;

    Ok(StampPageTemplate {
        page: PageContext::load(&state, &session, Some(user.clone())).await?,
        user,
        date,
        stamp_svg,
    })
}

/// Download the visitor's stamp as an SVG file.
///
/// GET /stamp.svg
pub async fn download(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
) -> Result<Response> {
    let date = today();
    let svg = render_for(&state, &user, &date)?;

    let disposition = format!(
        "attachment; filename=\"{}\"",
        download_file_name(&user.username, &date)
    );
    let disposition = HeaderValue::from_str(&disposition)
        .map_err(|e| AppError::Internal(format!("invalid download file name: {e}")))?;

    Ok((
        [
            (CONTENT_TYPE, HeaderValue::from_static("image/svg+xml")),
            (CONTENT_DISPOSITION, disposition),
        ],
        svg,
    )
        .into_response())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_download_file_name_plain_username() {
        let username = Username::parse("watanabe").unwrap();
        assert_eq!(
            download_file_name(&username, "2024-01-01"),
            "stamp-watanabe-2024-01-01.svg"
        );
    }

    #[test]
    fn test_download_file_name_replaces_unsafe_characters() {
        let username = Username::parse("o\"brien; x=1").unwrap();
        let name = download_file_name(&username, "2024-01-01");
        assert_eq!(name, "stamp-o_brien__x_1-2024-01-01.svg");

        let username = Username::parse("田中").unwrap();
        assert_eq!(
            download_file_name(&username, "2024-01-01"),
            "stamp-__-2024-01-01.svg"
        );
    }
}
