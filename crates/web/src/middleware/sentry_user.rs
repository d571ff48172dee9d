//! Sentry user context from the session identity.
//!
//! `sentry-tower` gives each request its own hub, so the user has to be
//! attached on every request rather than once at login.

use axum::{extract::Request, middleware::Next, response::Response};
use tower_sessions::Session;

use crate::models::{CurrentUser, session_keys};

/// Sentry user for a session identity, `None` for anonymous visitors.
#[must_use]
pub fn sentry_user(current: Option<&CurrentUser>) -> Option<sentry::User> {
    current.map(|user| sentry::User {
        username: Some(user.username.to_string()),
        ..Default::default()
    })
}

/// Tag the request's Sentry scope with the logged-in visitor.
///
/// Must run inside the session layer.
pub async fn sentry_user_middleware(session: Session, request: Request, next: Next) -> Response {
    let current = session
        .get::<CurrentUser>(session_keys::CURRENT_USER)
        .await
        .ok()
        .flatten();

    sentry::configure_scope(|scope| scope.set_user(sentry_user(current.as_ref())));

    next.run(request).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use stampdesk_core::{Profile, Username};

    use super::*;

    #[test]
    fn test_sentry_user_for_logged_in_visitor() {
        let user = CurrentUser::new(
            Username::parse("Tanaka").unwrap(),
            Profile::new("Hiroshi Tanaka", "Power Systems", "Senior Engineer"),
        );

        let sentry_user = sentry_user(Some(&user)).unwrap();
        assert_eq!(sentry_user.username.as_deref(), Some("tanaka"));
        assert!(sentry_user.email.is_none());
    }

    #[test]
    fn test_no_sentry_user_when_anonymous() {
        assert!(sentry_user(None).is_none());
    }
}
