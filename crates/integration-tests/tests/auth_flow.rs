//! Login, logout and session guard flows.

#![allow(clippy::unwrap_used)]

use axum::http::{
    HeaderName, HeaderValue,
    header::{CACHE_CONTROL, REFERRER_POLICY, SET_COOKIE},
};

use stampdesk::middleware::session::SESSION_COOKIE_NAME;
use stampdesk_integration_tests::{assert_redirect, logged_in_as, test_server};

#[tokio::test]
async fn test_health() {
    let server = test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_text("ok");
}

#[tokio::test]
async fn test_login_page_renders() {
    let server = test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("action=\"/login\""));
    assert!(body.contains("SEIKO ELECTRIC CO. LTD."));
}

#[tokio::test]
async fn test_login_then_stamp() {
    let server = logged_in_as("tanaka").await;

    let response = server.get("/stamp").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("HIROSHI TANAKA"));
    assert!(body.contains("POWER SYSTEMS DIVISION"));
    assert!(!body.contains("href=\"/admin\""), "non-admin sees no admin link");
}

#[tokio::test]
async fn test_login_normalizes_username() {
    let server = logged_in_as("  ADMIN ").await;

    let response = server.get("/stamp").await;

    response.assert_status_ok();
    assert!(response.text().contains("href=\"/admin\""));
}

#[tokio::test]
async fn test_unknown_user_shows_roster_and_no_session() {
    let server = test_server();

    let response = server.post("/login").form(&[("username", "nobody")]).await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains(
        "User not found. Please contact administrator or use valid credentials."
    ));
    assert!(body.contains("Available users"));
    assert!(body.contains("Akiko Suzuki"));
    assert!(body.contains("value=\"nobody\""));

    assert_redirect(&server.get("/stamp").await, "/");
}

#[tokio::test]
async fn test_empty_login_is_not_found() {
    let server = test_server();

    let response = server.post("/login").form(&[("username", "")]).await;

    response.assert_status_ok();
    assert!(response.text().contains("User not found."));
}

#[tokio::test]
async fn test_anonymous_stamp_redirects() {
    let server = test_server();

    assert_redirect(&server.get("/stamp").await, "/");
    assert_redirect(&server.get("/stamp.svg").await, "/");
}

#[tokio::test]
async fn test_logout_clears_session() {
    let server = logged_in_as("sato").await;
    server.get("/stamp").await.assert_status_ok();

    assert_redirect(&server.get("/logout").await, "/");

    assert_redirect(&server.get("/stamp").await, "/");
}

#[tokio::test]
async fn test_logout_without_session() {
    let server = test_server();

    assert_redirect(&server.get("/logout").await, "/");
}

#[tokio::test]
async fn test_security_headers_present() {
    let server = test_server();

    let response = server.get("/").await;

    assert_eq!(response.header("x-frame-options"), "DENY");
    assert_eq!(response.header("x-content-type-options"), "nosniff");
    assert!(response.header("content-security-policy").to_str().unwrap().contains("script-src 'none'"));
    assert!(!response.header("x-request-id").is_empty());
}

#[tokio::test]
async fn test_login_rotates_session_id() {
    let server = test_server();

    // An anonymous admin page load queues a flash, which creates a session
    let anonymous = server.get("/admin").await;
    assert_redirect(&anonymous, "/");
    let before = anonymous.cookie(SESSION_COOKIE_NAME);

    let login = server.post("/login").form(&[("username", "tanaka")]).await;
    assert_redirect(&login, "/stamp");
    let after = login.cookie(SESSION_COOKIE_NAME);

    assert_ne!(before.value(), after.value());

    // The queued flash survives the rotation
    let body = server.get("/").await.text();
    assert!(body.contains("Access denied. Admin privileges required."));
}

#[tokio::test]
async fn test_session_cookie_attributes() {
    let server = test_server();

    let response = server.post("/login").form(&[("username", "sato")]).await;

    let set_cookie = response.header(SET_COOKIE);
    let set_cookie = set_cookie.to_str().unwrap();
    assert!(set_cookie.starts_with(&format!("{SESSION_COOKIE_NAME}=")));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Strict"));
    assert!(set_cookie.contains("Path=/"));
    assert!(!set_cookie.contains("Max-Age"), "cookie must end with the browser session");
    assert!(!set_cookie.contains("Expires"), "cookie must end with the browser session");
    assert!(!set_cookie.contains("Secure"), "plain http base URL");
}

#[tokio::test]
async fn test_privacy_headers_on_pages_and_redirects() {
    let server = logged_in_as("suzuki").await;

    for response in [server.get("/stamp").await, server.get("/admin").await] {
        assert_eq!(response.header(REFERRER_POLICY), "no-referrer");
        assert!(
            response
                .header(CACHE_CONTROL)
                .to_str()
                .unwrap()
                .contains("no-store")
        );
    }
}

#[tokio::test]
async fn test_upstream_request_id_is_echoed() {
    let server = test_server();

    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("edge-42"),
        )
        .await;

    assert_eq!(response.header("x-request-id"), "edge-42");

    let replaced = server
        .get("/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("bad id"),
        )
        .await;
    assert_ne!(replaced.header("x-request-id"), "bad id");
}
