use crate::{
    dto::{ValidateIpRequest, ValidateIpResponse},
    errors::ApiError,
};
use axum::{body::Bytes, Json};
use dnsaudit_domain::is_ipv4;
use dnsaudit_infrastructure::metrics;
use tracing::{debug, instrument, warn};

/// Body is parsed as JSON whatever the declared content type.
#[instrument(skip_all, name = "api_validate_ip")]
pub async fn validate_ip(body: Bytes) -> Result<Json<ValidateIpResponse>, ApiError> {
    let request: ValidateIpRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "Malformed validate request body");
        ApiError::bad_request("Bad request")
    })?;

    let status = is_ipv4(&request.ip);
    metrics::record_validation(status);
    debug!(ip = %request.ip, status, "Address validated");

    Ok(Json(ValidateIpResponse { status }))
}
