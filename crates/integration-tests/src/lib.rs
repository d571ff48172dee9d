//! HTTP flow tests for Stampdesk.
//!
//! The tests drive the real router in-process with `axum-test`; no server or
//! external service is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p stampdesk-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `auth_flow` - Login, logout and session guards
//! - `stamp` - Stamp page and download
//! - `admin_directory` - Roster administration and flash messages

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use axum::http::{StatusCode, header::LOCATION};
use axum_test::{TestResponse, TestServer};

use stampdesk::build_app;
use stampdesk::config::StampdeskConfig;
use stampdesk::directory::DirectoryStore;
use stampdesk::state::AppState;

fn fresh_state() -> AppState {
    AppState::new(StampdeskConfig::default(), DirectoryStore::seeded())
}

fn browser(state: AppState) -> TestServer {
    TestServer::builder()
        .save_cookies()
        .build(build_app(state))
        .unwrap()
}

/// Create a test server over a freshly seeded directory.
///
/// Cookies are kept between requests, so one server acts as one browser.
#[must_use]
pub fn test_server() -> TestServer {
    browser(fresh_state())
}

/// Create two browsers sharing one freshly seeded directory.
#[must_use]
pub fn two_browsers() -> (TestServer, TestServer) {
    let state = fresh_state();
    (browser(state.clone()), browser(state))
}

/// Log `server` in as `username`.
pub async fn log_in(server: &TestServer, username: &str) {
    let response = server.post("/login").form(&[("username", username)]).await;
    assert_redirect(&response, "/stamp");
}

/// Create a test server and log in as `username`.
pub async fn logged_in_as(username: &str) -> TestServer {
    let server = test_server();
    log_in(&server, username).await;
    server
}

/// Assert that `response` redirects to `location`.
pub fn assert_redirect(response: &TestResponse, location: &str) {
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header(LOCATION), location);
}
