//! Session manager.
//!
//! Resolves a login name against the directory and decides which identity a
//! visitor holds. Storing the identity in the cookie-backed session is done by
//! the helpers in [`crate::middleware::auth`].

use thiserror::Error;

use stampdesk_core::Username;

use crate::directory::DirectoryStore;
use crate::models::CurrentUser;

/// Errors that can occur when logging in.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoginError {
    /// The name is not in the directory.
    ///
    /// Carries the usernames the visitor can pick from instead.
    #[error("user not found")]
    NotFound { available: Vec<Username> },
}

/// Errors raised by session guards.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    /// No visitor is logged in.
    #[error("login required")]
    Unauthenticated,

    /// The visitor is logged in but is not the administrator.
    #[error("access denied")]
    Forbidden,
}

/// Session manager.
pub struct SessionManager<'a> {
    directory: &'a DirectoryStore,
}

impl<'a> SessionManager<'a> {
    /// Create a session manager over a directory.
    #[must_use]
    pub const fn new(directory: &'a DirectoryStore) -> Self {
        Self { directory }
    }

    /// Resolve a login name to a session identity.
    ///
    /// The name is trimmed and case-folded. The returned identity holds a copy
    /// of the profile as it is right now.
    ///
    /// # Errors
    ///
    /// Returns `LoginError::NotFound` with the available usernames if the name
    /// is blank or not in the directory.
    pub fn login(&self, raw_username: &str) -> Result<CurrentUser, LoginError> {
        let profile = Username::parse(raw_username)
            .ok()
            .and_then(|username| Some((self.directory.get(&username)?, username)));

        match profile {
            Some((profile, username)) => {
                tracing::info!(username = %username, "User logged in");
                Ok(CurrentUser::new(username, profile))
            }
            None => {
                tracing::info!(attempted = raw_username.trim(), "Login for unknown user");
                Err(LoginError::NotFound {
                    available: self.directory.usernames(),
                })
            }
        }
    }
}

/// Require a logged-in visitor.
///
/// # Errors
///
/// Returns `AccessError::Unauthenticated` if there is no identity.
pub fn require_session(current: Option<CurrentUser>) -> Result<CurrentUser, AccessError> {
    current.ok_or(AccessError::Unauthenticated)
}

/// Require the administrator.
///
/// Anonymous visitors get `Forbidden` too, so callers learn nothing about
/// where to log in.
///
/// # Errors
///
/// Returns `AccessError::Forbidden` unless the identity carries the admin flag.
pub fn require_admin(current: Option<&CurrentUser>) -> Result<&CurrentUser, AccessError> {
    match current {
        Some(user) if user.is_admin => Ok(user),
        _ => Err(AccessError::Forbidden),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use stampdesk_core::Profile;

    use super::*;

    #[test]
    fn test_login_known_user() {
        let directory = DirectoryStore::seeded();
        let user = SessionManager::new(&directory).login("tanaka").unwrap();

        assert_eq!(user.username.as_str(), "tanaka");
        assert_eq!(user.profile.department, "Power Systems");
        assert!(!user.is_admin);
    }

    #[test]
    fn test_login_is_case_insensitive() {
        let directory = DirectoryStore::seeded();
        let user = SessionManager::new(&directory).login("  SaTo ").unwrap();
        assert_eq!(user.username.as_str(), "sato");
        assert_eq!(user.profile.full_name, "Yuki Sato");
    }

    #[test]
    fn test_login_admin_sets_flag() {
        let directory = DirectoryStore::seeded();
        let user = SessionManager::new(&directory).login("Admin").unwrap();
        assert!(user.is_admin);
    }

    #[test]
    fn test_login_unknown_user_lists_roster() {
        let directory = DirectoryStore::seeded();
        let err = SessionManager::new(&directory).login("nakamura").unwrap_err();

        let LoginError::NotFound { available } = err;
        assert_eq!(available, directory.usernames());
    }

    #[test]
    fn test_login_blank_is_not_found() {
        let directory = DirectoryStore::seeded();
        assert!(matches!(
            SessionManager::new(&directory).login("   "),
            Err(LoginError::NotFound { .. })
        ));
    }

    #[test]
    fn test_snapshot_ignores_later_edits() {
        let directory = DirectoryStore::seeded();
        let user = SessionManager::new(&directory).login("suzuki").unwrap();

        directory
            .replace(
                &user.username,
                Profile::new("Akiko Suzuki", "Green Engineering", "Director"),
            )
            .unwrap();

        assert_eq!(user.profile.department, "Control Technology");
        assert_eq!(user.profile.position, "Project Manager");
    }

    #[test]
    fn test_require_session() {
        assert_eq!(require_session(None), Err(AccessError::Unauthenticated));

        let directory = DirectoryStore::seeded();
        let user = SessionManager::new(&directory).login("tanaka").unwrap();
        assert_eq!(require_session(Some(user.clone())), Ok(user));
    }

    #[test]
    fn test_require_admin() {
        let directory = DirectoryStore::seeded();
        let manager = SessionManager::new(&directory);
        let tanaka = manager.login("tanaka").unwrap();
        let admin = manager.login("admin").unwrap();

        assert_eq!(require_admin(None), Err(AccessError::Forbidden));
        assert_eq!(require_admin(Some(&tanaka)), Err(AccessError::Forbidden));
        assert_eq!(require_admin(Some(&admin)), Ok(&admin));
    }
}
