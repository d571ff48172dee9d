//! Business logic services.
//!
//! - [`session`] - Resolving login names into session identities
//! - [`directory_admin`] - Roster add/edit/delete gated on the admin flag

pub mod directory_admin;
pub mod session;

pub use directory_admin::{DirectoryAdminError, DirectoryAdminService, UserFields};
pub use session::{AccessError, LoginError, SessionManager, require_admin, require_session};
