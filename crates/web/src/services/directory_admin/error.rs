//! Directory admin error types.

use thiserror::Error;

use crate::directory::DirectoryError;

/// Errors that can occur during roster administration.
///
/// The `Display` text is the status message shown to the administrator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryAdminError {
    /// Caller is anonymous or not the administrator.
    #[error("Access denied")]
    Forbidden,

    /// Username already present on add.
    #[error("Username already exists!")]
    Conflict,

    /// A required field is empty on add.
    #[error("All fields are required!")]
    InvalidInput,

    /// Target username is absent (or, on edit, its name or department is empty).
    #[error("User not found!")]
    NotFound,

    /// Attempt to delete the reserved administrator.
    #[error("Cannot delete admin user!")]
    Protected,
}

impl From<DirectoryError> for DirectoryAdminError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::NotFound(_) => Self::NotFound,
            DirectoryError::Conflict(_) => Self::Conflict,
        }
    }
}
