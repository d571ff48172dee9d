//! The built-in roster seeded into every fresh directory.

use super::{Profile, Username};

/// The reserved administrator username.
///
/// Logging in as this user grants the admin flag, and the entry can never be
/// deleted from the directory.
pub const ADMIN_USERNAME: &str = "admin";

/// Departments offered by the admin forms.
pub const DEPARTMENTS: [&str; 6] = [
    "Power Systems",
    "Control Technology",
    "Green Engineering",
    "Renewable Energy",
    "System Components",
    "Engineering Service",
];

/// A static roster row.
#[derive(Debug, Clone, Copy)]
pub struct RosterEntry {
    pub username: &'static str,
    pub full_name: &'static str,
    pub department: &'static str,
    pub position: &'static str,
}

/// Users present on every start. Usernames are already normalized.
pub const BUILTIN_ROSTER: [RosterEntry; 6] = [
    RosterEntry {
        username: "tanaka",
        full_name: "Hiroshi Tanaka",
        department: "Power Systems",
        position: "Senior Engineer",
    },
    RosterEntry {
        username: "suzuki",
        full_name: "Akiko Suzuki",
        department: "Control Technology",
        position: "Project Manager",
    },
    RosterEntry {
        username: "yamamoto",
        full_name: "Kenji Yamamoto",
        department: "Green Engineering",
        position: "Chief Engineer",
    },
    RosterEntry {
        username: "sato",
        full_name: "Yuki Sato",
        department: "Renewable Energy",
        position: "Technical Lead",
    },
    RosterEntry {
        username: "watanabe",
        full_name: "Michiko Watanabe",
        department: "System Components",
        position: "Quality Manager",
    },
    RosterEntry {
        username: ADMIN_USERNAME,
        full_name: "System Administrator",
        department: "Engineering Service",
        position: "Admin",
    },
];

impl RosterEntry {
    /// Convert into an owned directory entry.
    #[must_use]
    pub fn to_entry(&self) -> (Username, Profile) {
        (
            Username::from_normalized(self.username),
            Profile::new(self.full_name, self.department, self.position),
        )
    }
}

/// Iterate the built-in roster as owned directory entries.
pub fn builtin_roster() -> impl Iterator<Item = (Username, Profile)> {
    BUILTIN_ROSTER.iter().map(RosterEntry::to_entry)
}
