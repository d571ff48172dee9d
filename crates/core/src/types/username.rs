//! Username type.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::roster::ADMIN_USERNAME;

/// Errors that can occur when parsing a [`Username`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UsernameError {
    /// The input is empty or only whitespace.
    #[error("username cannot be empty")]
    Empty,
}

/// A directory username.
///
/// Usernames are case-insensitive: parsing trims surrounding whitespace and
/// folds the input to lowercase, so `" Tanaka "` and `"tanaka"` name the same
/// directory entry.
///
/// ## Examples
///
/// ```
/// use stampdesk_core::Username;
///
/// let username = Username::parse("  Tanaka ").unwrap();
/// assert_eq!(username.as_str(), "tanaka");
///
/// assert!(Username::parse("").is_err());
/// assert!(Username::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Parse a `Username` from user input.
    ///
    /// # Errors
    ///
    /// Returns [`UsernameError::Empty`] if the input is empty after trimming.
    pub fn parse(s: &str) -> Result<Self, UsernameError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(UsernameError::Empty);
        }

        Ok(Self(trimmed.to_lowercase()))
    }

    /// Wrap a string that is already trimmed and lowercase.
    pub(crate) fn from_normalized(s: &str) -> Self {
        Self(s.to_owned())
    }

    /// The reserved administrator account.
    #[must_use]
    pub fn admin() -> Self {
        Self::from_normalized(ADMIN_USERNAME)
    }

    /// Whether this is the reserved administrator account.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.0 == ADMIN_USERNAME
    }

    /// Returns the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Username` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Username {
    type Err = UsernameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
