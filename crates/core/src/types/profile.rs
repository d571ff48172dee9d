//! Profile type.

use serde::{Deserialize, Serialize};

/// Display data attached to a username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Profile {
    /// Full display name, e.g. "Hiroshi Tanaka".
    pub full_name: String,
    /// Department name, e.g. "Power Systems".
    pub department: String,
    /// Job title. May be empty.
    pub position: String,
}

impl Profile {
    /// Create a new profile.
    #[must_use]
    pub fn new(
        full_name: impl Into<String>,
        department: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            department: department.into(),
            position: position.into(),
        }
    }
}
