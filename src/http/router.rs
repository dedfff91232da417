//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Free-slot search
        .route("/free-slots", post(handlers::search_free_slots))
        .route("/free-slots", get(handlers::search_free_slots_quick))
        // Advisory conflict check
        .route("/conflicts", post(handlers::check_conflicts))
        // Hearing CRUD
        .route("/hearings", get(handlers::list_hearings))
        .route("/hearings", post(handlers::create_hearing))
        .route(
            "/hearings/{id}",
            put(handlers::update_hearing).delete(handlers::delete_hearing),
        );

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SchedulingConfig;
    use crate::db::RepositoryFactory;

    #[test]
    fn test_router_creation() {
        let repo = RepositoryFactory::create_local();
        let state = AppState::new(repo, SchedulingConfig::default());
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
