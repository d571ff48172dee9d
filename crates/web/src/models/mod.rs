//! Domain models for the stamp desk.

pub mod flash;
pub mod session;

pub use flash::{Flash, FlashLevel};
pub use session::{CurrentUser, keys as session_keys};
