//! Route definitions for the TradeDesk HTTP API.
//!
//! All routes are mounted under `/api`. Activity tracking wraps every route,
//! so any identified request refreshes presence before its handler runs.
//! Admin routes check the caller's role first; a rejected request never
//! reaches activity tracking.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and the activity middleware.
pub fn build_router(state: AppState) -> Router {
    let activity =
        axum_middleware::from_fn_with_state(state.clone(), middleware::activity::track_activity);

    let tracked_routes = Router::new()
        .merge(auth_routes())
        .merge(presence_routes())
        .merge(health_routes())
        .layer(activity.clone());

    let api_routes = Router::new()
        .merge(tracked_routes)
        .merge(admin_routes().layer(activity).route_layer(
            axum_middleware::from_fn_with_state(state.clone(), middleware::rbac::admin_guard),
        ));

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Session endpoints
fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/logout", post(handlers::auth::logout))
}

/// Presence lookup
fn presence_routes() -> Router<AppState> {
    Router::new().route(
        "/presence/{user_id}",
        get(handlers::presence::get_presence),
    )
}

/// Admin dashboards
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/online", get(handlers::admin::online_admins))
        .route("/admin/sessions", get(handlers::admin::list_sessions))
}

/// Health checks
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}
