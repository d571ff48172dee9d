//! HTTP middleware stack.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, added in `main`)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Session layer (tower-sessions with in-memory store)
//! 5. Sentry user (tag the request's scope with the session identity)
//! 6. Security headers (CSP, frame denial, no-store)

pub mod auth;
pub mod flash;
pub mod request_id;
pub mod security_headers;
pub mod sentry_user;
pub mod session;

pub use auth::{
    AdminRejection, OptionalUser, RequireAdmin, RequireUser, clear_current_user,
    set_current_user,
};
pub use flash::{push_flash, take_flashes};
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use sentry_user::sentry_user_middleware;
pub use session::create_session_layer;
