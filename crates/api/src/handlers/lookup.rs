use crate::{
    dto::{LookupParams, ResolutionEventResponse},
    errors::ApiError,
    state::AppState,
};
use axum::{
    extract::{rejection::QueryRejection, ConnectInfo, Query, State},
    Json,
};
use dnsaudit_domain::DomainError;
use dnsaudit_infrastructure::metrics::{self, LookupResult, Timer};
use std::net::SocketAddr;
use tracing::{info, instrument, warn};

#[instrument(skip_all, name = "api_lookup_domain")]
pub async fn lookup_domain(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    query: Result<Query<LookupParams>, QueryRejection>,
) -> Result<Json<ResolutionEventResponse>, ApiError> {
    let timer = Timer::start();

    let Query(params) = query.map_err(|e| {
        warn!(client_ip = %peer.ip(), error = %e, "Malformed lookup query");
        metrics::record_lookup(LookupResult::Invalid, timer.elapsed());
        ApiError::bad_request("Bad request: malformed query string")
    })?;

    match state
        .lookup
        .execute(params.domain.as_deref(), peer.ip())
        .await
    {
        Ok(event) => {
            metrics::record_lookup(LookupResult::Success, timer.elapsed());
            info!(
                client_ip = %peer.ip(),
                domain = %event.domain,
                count = event.addresses.len(),
                "Lookup succeeded"
            );
            Ok(Json(event.into()))
        }
        Err(DomainError::InvalidRequest(msg)) => {
            metrics::record_lookup(LookupResult::Invalid, timer.elapsed());
            warn!(client_ip = %peer.ip(), "Lookup without domain");
            Err(ApiError::bad_request(format!("Bad request: {}", msg)))
        }
        Err(e) if e.is_resolution_failure() => {
            metrics::record_lookup(LookupResult::NotFound, timer.elapsed());
            Err(ApiError::not_found(
                "Failed to resolve domain, please check if the domain is correct.",
            ))
        }
        Err(_) => {
            metrics::record_lookup(LookupResult::StoreError, timer.elapsed());
            Err(ApiError::internal("Failed to save query to the database"))
        }
    }
}
