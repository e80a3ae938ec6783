//! Shared test helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use tower::ServiceExt;

use tradedesk_api::AppState;
use tradedesk_core::config::AppConfig;
use tradedesk_core::traits::{Clock, ManualClock};

/// Identity the upstream session provider would assert.
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: &'static str,
    pub role: Option<&'static str>,
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
}

impl TestUser {
    pub fn new(id: &'static str, role: &'static str) -> Self {
        Self {
            id,
            role: Some(role),
            name: Some(id),
            email: None,
        }
    }

    pub fn admin(id: &'static str) -> Self {
        Self::new(id, "ADMIN")
    }

    pub fn user(id: &'static str) -> Self {
        Self::new(id, "USER")
    }

    pub fn with_email(mut self, email: &'static str) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    pub fn without_name(mut self) -> Self {
        self.name = None;
        self
    }

    pub fn without_role(mut self) -> Self {
        self.role = None;
        self
    }
}

/// Response captured from the router
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for inspecting the registry directly
    pub state: AppState,
    /// Clock driving the registry
    pub clock: Arc<ManualClock>,
}

impl TestApp {
    /// Create a new test application with default configuration
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new test application with the given configuration
    pub fn with_config(config: AppConfig) -> Self {
        let clock = Arc::new(ManualClock::at_epoch());
        let cors = config.server.cors.clone();
        let state = AppState::with_clock(config, Arc::clone(&clock) as Arc<dyn Clock>);
        let router = tradedesk_api::build_app(state.clone(), &cors);
        Self {
            router,
            state,
            clock,
        }
    }

    /// Current time on the test clock
    pub fn clock_now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Move time forward
    pub fn advance(&self, by: Duration) {
        self.clock.advance(by);
    }

    /// Send a request, optionally as `user`
    pub async fn request(&self, method: &str, path: &str, user: Option<&TestUser>) -> TestResponse {
        let mut builder = Request::builder()
            .method(Method::from_bytes(method.as_bytes()).unwrap())
            .uri(path);

        if let Some(user) = user {
            builder = builder.header("x-user-id", user.id);
            if let Some(role) = user.role {
                builder = builder.header("x-user-role", role);
            }
            if let Some(name) = user.name {
                builder = builder.header("x-user-name", name);
            }
            if let Some(email) = user.email {
                builder = builder.header("x-user-email", email);
            }
        }

        let response = self
            .router
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Ids listed by `GET /api/admin/online` as `viewer`
    pub async fn online_ids(&self, viewer: &TestUser) -> Vec<String> {
        let response = self.request("GET", "/api/admin/online", Some(viewer)).await;
        assert_eq!(response.status, StatusCode::OK);
        response
            .body
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["id"].as_str().unwrap().to_string())
            .collect()
    }
}
