//! Router configuration for the HTTP API.
//!
//! Sets up all routes and middleware (body limit, CORS, compression, tracing).

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Default request body limit (1 MiB).
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Create the main application router with the default body limit.
pub fn create_router(state: AppState) -> Router {
    create_router_with_limit(state, DEFAULT_BODY_LIMIT)
}

/// Create the main application router with all routes and middleware.
pub fn create_router_with_limit(state: AppState, body_limit: usize) -> Router {
    // Permissive CORS; the dashboard is served from another origin in development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/analytics", post(handlers::compute_analytics))
        // Activities
        .route(
            "/users/{user_id}/activities",
            get(handlers::list_activities).post(handlers::create_activity),
        )
        .route(
            "/users/{user_id}/activities/{activity_id}",
            delete(handlers::delete_activity).put(handlers::update_activity),
        )
        // Analytics over stored activities
        .route("/users/{user_id}/analytics", get(handlers::get_user_analytics))
        .route("/users/{user_id}/dashboard", get(handlers::get_dashboard))
        // Goals
        .route(
            "/users/{user_id}/goals",
            get(handlers::list_goals).post(handlers::create_goal),
        )
        .route("/users/{user_id}/goals/{goal_id}", delete(handlers::delete_goal))
        .route("/users/{user_id}/goals/{goal_id}/toggle", post(handlers::toggle_goal));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
