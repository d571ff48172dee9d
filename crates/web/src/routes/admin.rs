//! Roster administration route handlers (admin only).

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;

use stampdesk_core::DEPARTMENTS;

use crate::error::Result;
use crate::filters;
use crate::middleware::{RequireAdmin, push_flash};
use crate::models::Flash;
use crate::services::{DirectoryAdminError, DirectoryAdminService, UserFields};
use crate::state::AppState;

use super::{PageContext, RosterRow};

/// Add and edit form data. Missing fields are empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UserForm {
    pub username: String,
    pub full_name: String,
    pub department: String,
    pub position: String,
}

impl UserForm {
    fn fields(&self) -> UserFields<'_> {
        UserFields {
            username: &self.username,
            full_name: &self.full_name,
            department: &self.department,
            position: &self.position,
        }
    }
}

/// Delete form data.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteForm {
    pub username: String,
}

/// Roster admin page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin.html")]
pub struct AdminTemplate {
    pub page: PageContext,
    pub users: Vec<RosterRow>,
    pub departments: &'static [&'static str],
}

/// Roster table with add, edit and delete forms.
///
/// GET /admin
pub async fn index(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    session: Session,
) -> Result<AdminTemplate> {
    let users = state
        .directory()
        .list()
        .into_iter()
        .map(|(username, profile)| RosterRow::new(&username, profile))
        .collect();

    Ok(AdminTemplate {
        page: PageContext::load(&state, &session, Some(admin)).await?,
        users,
        departments: &DEPARTMENTS,
    })
}

/// Add a roster entry.
///
/// POST /admin/add_user
pub async fn add_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<UserForm>,
) -> Result<impl IntoResponse> {
    let service = DirectoryAdminService::new(state.directory());
    let flash = match service.add_user(Some(&admin), &form.fields()) {
        Ok(username) => Flash::success(format!("User {username} added successfully!")),
        Err(e) => Flash::error(e.to_string()),
    };

    push_flash(&session, flash).await?;
    Ok(Redirect::to("/admin"))
}

/// Edit a roster entry.
///
/// POST /admin/edit_user
pub async fn edit_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<UserForm>,
) -> Result<impl IntoResponse> {
    let service = DirectoryAdminService::new(state.directory());
    let flash = match service.edit_user(Some(&admin), &form.fields()) {
        Ok(username) => Flash::success(format!("User {username} updated successfully!")),
        Err(DirectoryAdminError::NotFound) => Flash::error("User not found or invalid data!"),
        Err(e) => Flash::error(e.to_string()),
    };

    push_flash(&session, flash).await?;
    Ok(Redirect::to("/admin"))
}

/// Delete a roster entry.
///
/// POST /admin/delete_user
pub async fn delete_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<DeleteForm>,
) -> Result<impl IntoResponse> {
    let service = DirectoryAdminService::new(state.directory());
    let flash = match service.delete_user(Some(&admin), &form.username) {
        Ok(username) => Flash::success(format!("User {username} deleted successfully!")),
        Err(e) => Flash::error(e.to_string()),
    };

    push_flash(&session, flash).await?;
    Ok(Redirect::to("/admin"))
}
