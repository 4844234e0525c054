use crate::{dto::RootResponse, state::AppState};
use axum::{extract::State, Json};
use tracing::{debug, instrument};

#[instrument(skip_all, name = "api_get_root")]
pub async fn get_root(State(state): State<AppState>) -> Json<RootResponse> {
    let response = RootResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        date: chrono::Utc::now().timestamp(),
        kubernetes: state.kubernetes,
    };
    debug!(?response, "Root requested");
    Json(response)
}
