//! Directory admin service.
//!
//! Add, edit and delete roster entries. Every operation checks the caller's
//! admin flag before touching the directory.

mod error;

pub use error::DirectoryAdminError;

use stampdesk_core::{Profile, Username};

use crate::directory::DirectoryStore;
use crate::models::CurrentUser;
use crate::services::session::require_admin;

/// Raw roster fields as submitted by the admin forms.
#[derive(Debug, Clone, Default)]
pub struct UserFields<'a> {
    pub username: &'a str,
    pub full_name: &'a str,
    pub department: &'a str,
    pub position: &'a str,
}

impl UserFields<'_> {
    fn trimmed_profile(&self) -> Profile {
        Profile::new(
            self.full_name.trim(),
            self.department.trim(),
            self.position.trim(),
        )
    }
}

/// Directory admin service.
pub struct DirectoryAdminService<'a> {
    directory: &'a DirectoryStore,
}

impl<'a> DirectoryAdminService<'a> {
    /// Create a new directory admin service.
    #[must_use]
    pub const fn new(directory: &'a DirectoryStore) -> Self {
        Self { directory }
    }

    fn authorize<'u>(
        actor: Option<&'u CurrentUser>,
        action: &str,
    ) -> Result<&'u CurrentUser, DirectoryAdminError> {
        require_admin(actor).map_err(|_| {
            tracing::warn!(
                actor = actor.map(|a| a.username.as_str()),
                action,
                "Rejected non-admin directory change"
            );
            DirectoryAdminError::Forbidden
        })
    }

    /// Add a roster entry.
    ///
    /// All four fields are required. An existing username is reported before
    /// any missing field.
    ///
    /// # Errors
    ///
    /// - `Forbidden` if `actor` is not the administrator
    /// - `Conflict` if the username is taken
    /// - `InvalidInput` if any field is empty
    pub fn add_user(
        &self,
        actor: Option<&CurrentUser>,
        fields: &UserFields<'_>,
    ) -> Result<Username, DirectoryAdminError> {
        let admin = Self::authorize(actor, "add_user")?;

        let username = Username::parse(fields.username).ok();
        if username
            .as_ref()
            .is_some_and(|username| self.directory.contains(username))
        {
            return Err(DirectoryAdminError::Conflict);
        }

        let profile = fields.trimmed_profile();
        let username = match username {
            Some(username)
                if !profile.full_name.is_empty()
                    && !profile.department.is_empty()
                    && !profile.position.is_empty() =>
            {
                username
            }
            _ => return Err(DirectoryAdminError::InvalidInput),
        };

        self.directory.insert_new(username.clone(), profile)?;
        tracing::info!(admin = %admin.username, username = %username, "User added");

        Ok(username)
    }

    /// Replace an entry's profile.
    ///
    /// Full name and department are required; position may be empty.
    ///
    /// # Errors
    ///
    /// - `Forbidden` if `actor` is not the administrator
    /// - `NotFound` if the username is absent, or full name or department is empty
    pub fn edit_user(
        &self,
        actor: Option<&CurrentUser>,
        fields: &UserFields<'_>,
    ) -> Result<Username, DirectoryAdminError> {
        let admin = Self::authorize(actor, "edit_user")?;

        let username =
            Username::parse(fields.username).map_err(|_| DirectoryAdminError::NotFound)?;
        let profile = fields.trimmed_profile();
        if profile.full_name.is_empty() || profile.department.is_empty() {
            return Err(DirectoryAdminError::NotFound);
        }

        self.directory.replace(&username, profile)?;
        tracing::info!(admin = %admin.username, username = %username, "User updated");

        Ok(username)
    }

    /// Remove an entry.
    ///
    /// # Errors
    ///
    /// - `Forbidden` if `actor` is not the administrator
    /// - `Protected` if `username` is the reserved administrator
    /// - `NotFound` if the username is absent
    pub fn delete_user(
        &self,
        actor: Option<&CurrentUser>,
        username: &str,
    ) -> Result<Username, DirectoryAdminError> {
        let admin = Self::authorize(actor, "delete_user")?;

        let username = Username::parse(username).map_err(|_| DirectoryAdminError::NotFound)?;
        if username.is_admin() {
            return Err(DirectoryAdminError::Protected);
        }

        self.directory.remove(&username)?;
        tracing::info!(admin = %admin.username, username = %username, "User deleted");

        Ok(username)
    }
}
