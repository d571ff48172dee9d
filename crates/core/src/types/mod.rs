//! Core types for Stampdesk.
//!
//! This module provides type-safe wrappers for directory concepts.

pub mod profile;
pub mod roster;
pub mod username;

pub use profile::Profile;
pub use roster::{ADMIN_USERNAME, BUILTIN_ROSTER, DEPARTMENTS, RosterEntry, builtin_roster};
pub use username::{Username, UsernameError};
