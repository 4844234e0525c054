use dnsaudit_application::use_cases::{GetHistoryUseCase, LookupDomainUseCase};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<LookupDomainUseCase>,
    pub get_history: Arc<GetHistoryUseCase>,
    pub metrics: PrometheusHandle,
    /// Reported by the root endpoint only
    pub kubernetes: bool,
}
