use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::get_root).fallback(handlers::method_not_allowed),
        )
        .nest("/v1", v1_routes())
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::render_metrics))
        .route("/swagger.yaml", get(handlers::get_swagger))
        .with_state(state)
}

fn v1_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/tools/validate",
            post(handlers::validate_ip).fallback(handlers::method_not_allowed),
        )
        .route(
            "/tools/lookup",
            get(handlers::lookup_domain).fallback(handlers::method_not_allowed),
        )
        .route(
            "/history",
            get(handlers::get_history).fallback(handlers::method_not_allowed),
        )
}
