use crate::{dto::ResolutionEventResponse, errors::ApiError, state::AppState};
use axum::{extract::State, Json};
use dnsaudit_infrastructure::metrics;
use tracing::{debug, error, instrument};

#[instrument(skip_all, name = "api_get_history")]
pub async fn get_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResolutionEventResponse>>, ApiError> {
    match state.get_history.execute().await {
        Ok(events) => {
            metrics::record_history(true);
            debug!(count = events.len(), "History served");
            Ok(Json(events.into_iter().map(Into::into).collect()))
        }
        Err(e) => {
            metrics::record_history(false);
            error!(error = %e, "Failed to fetch query history");
            Err(ApiError::internal("Failed to fetch query history"))
        }
    }
}
