//! Integration tests for the admin presence endpoints.

mod helpers;

use axum::http::StatusCode;
use chrono::Duration;

use tradedesk_core::config::AppConfig;

use helpers::{TestApp, TestUser};

#[tokio::test]
async fn test_online_requires_identity() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/admin/online", None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_online_forbidden_for_regular_user() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/admin/online", Some(&TestUser::user("u1")))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN");
}

#[tokio::test]
async fn test_denied_request_leaves_registry_untouched() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/admin/online", Some(&TestUser::user("u9")))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert!(app.state.presence.get_all().is_empty());

    let response = app
        .request("GET", "/api/admin/sessions", Some(&TestUser::user("u9")))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert!(app.state.presence.get_all().is_empty());
}

#[tokio::test]
async fn test_denied_request_keeps_existing_timestamp() {
    let app = TestApp::new();
    let user = TestUser::user("u1");

    app.request("GET", "/api/health", Some(&user)).await;
    let first_seen = app.clock_now();
    app.advance(Duration::seconds(30));

    let response = app.request("GET", "/api/admin/online", Some(&user)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(app.state.presence.get_all()["u1"].last_active, first_seen);
}

#[tokio::test]
async fn test_online_lists_admin_roles_only() {
    let app = TestApp::new();
    let admin = TestUser::admin("a1").with_email("a1@x.com");

    app.request("GET", "/api/health", Some(&TestUser::user("u1")))
        .await;
    app.request("GET", "/api/health", Some(&TestUser::new("s1", "SUPERADMIN")))
        .await;
    app.request("GET", "/api/health", Some(&TestUser::new("o1", "OWNER")))
        .await;

    let response = app.request("GET", "/api/admin/online", Some(&admin)).await;
    assert_eq!(response.status, StatusCode::OK);

    let entries = response.body.as_array().unwrap();
    let ids: Vec<&str> = entries.iter().map(|e| e["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["s1", "o1", "a1"]);

    let own = &entries[2];
    assert_eq!(own["name"], "a1");
    assert_eq!(own["email"], "a1@x.com");
    assert_eq!(own["role"], "ADMIN");
    assert_eq!(own["isOnline"], true);
    assert_eq!(own["lastSeen"], "1970-01-01T00:00:00.000Z");
    assert_eq!(own["lastActive"], 0);
}

#[tokio::test]
async fn test_online_excludes_expired_admins() {
    let app = TestApp::new();
    let early = TestUser::admin("early");
    let late = TestUser::admin("late");

    app.request("GET", "/api/health", Some(&early)).await;
    app.advance(Duration::seconds(60));
    assert_eq!(app.online_ids(&late).await, vec!["early", "late"]);

    app.advance(Duration::seconds(241));
    assert_eq!(app.online_ids(&late).await, vec!["late"]);
    assert!(!app.state.presence.get_all().contains_key("early"));
}

#[tokio::test]
async fn test_logged_out_admin_not_listed() {
    let app = TestApp::new();
    let leaving = TestUser::admin("leaving");
    let viewer = TestUser::new("viewer", "OWNER");

    app.request("GET", "/api/health", Some(&leaving)).await;
    app.request("POST", "/api/auth/logout", Some(&leaving)).await;

    assert_eq!(app.online_ids(&viewer).await, vec!["viewer"]);
}

#[tokio::test]
async fn test_sessions_lists_every_live_record() {
    let app = TestApp::new();

    app.request("GET", "/api/health", Some(&TestUser::user("u1")))
        .await;
    app.advance(Duration::seconds(10));

    let response = app
        .request("GET", "/api/admin/sessions", Some(&TestUser::admin("a1")))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.body["data"].as_object().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data["u1"]["role"], "USER");
    assert_eq!(data["u1"]["lastActive"], "1970-01-01T00:00:00Z");
    assert_eq!(data["a1"]["lastActive"], "1970-01-01T00:00:10Z");
}

#[tokio::test]
async fn test_sessions_forbidden_for_regular_user() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/admin/sessions", Some(&TestUser::user("u1")))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_configured_timeout_and_roles() {
    let mut config = AppConfig::default();
    config.presence.timeout_ms = 30_000;
    config.auth.admin_roles = vec!["STAFF".to_string()];
    let app = TestApp::with_config(config);

    let staff = TestUser::new("st1", "STAFF");
    let admin = TestUser::admin("a1");

    app.request("GET", "/api/health", Some(&admin)).await;
    let response = app.request("GET", "/api/admin/online", Some(&admin)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    app.advance(Duration::seconds(31));
    assert_eq!(app.online_ids(&staff).await, vec!["st1"]);
    assert!(!app.state.presence.is_online("a1"));
}
