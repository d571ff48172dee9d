//! Session-related types.
//!
//! Types stored in the session for identity state.

use serde::{Deserialize, Serialize};

use stampdesk_core::{Profile, Username};

/// Session-stored visitor identity.
///
/// The profile is a snapshot taken at login. Later directory edits are not
/// reflected until the visitor logs in again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Directory username.
    pub username: Username,
    /// Profile copied from the directory at login.
    pub profile: Profile,
    /// Whether this visitor may use the roster admin panel.
    pub is_admin: bool,
}

impl CurrentUser {
    /// Build the identity for a directory entry.
    ///
    /// Only the reserved administrator account receives the admin flag.
    #[must_use]
    pub fn new(username: Username, profile: Profile) -> Self {
        let is_admin = username.is_admin();
        Self {
            username,
            profile,
            is_admin,
        }
    }
}

/// Session keys.
pub mod keys {
    /// Key for storing the current logged-in visitor.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for pending flash messages.
    pub const FLASH: &str = "flash";
}
