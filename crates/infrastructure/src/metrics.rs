//! Metrics instrumentation for the DNS audit service.
//!
//! All metrics are prefixed with `dnsaudit.`

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::time::{Duration, Instant};

/// Install the global Prometheus recorder; the handle renders `/metrics`.
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// A handle backed by a recorder that is not installed globally.
pub fn detached_handle() -> PrometheusHandle {
    PrometheusBuilder::new().build_recorder().handle()
}

/// Lookup outcome for metrics.
#[derive(Debug, Clone, Copy)]
pub enum LookupResult {
    Success,
    /// Missing or empty domain.
    Invalid,
    /// Resolver failure or timeout.
    NotFound,
    /// Resolved but the event could not be stored.
    StoreError,
}

impl LookupResult {
    fn as_str(&self) -> &'static str {
        match self {
            LookupResult::Success => "success",
            LookupResult::Invalid => "invalid",
            LookupResult::NotFound => "not_found",
            LookupResult::StoreError => "store_error",
        }
    }
}

pub fn record_lookup(result: LookupResult, duration: Duration) {
    counter!("dnsaudit.lookup.count", "result" => result.as_str()).increment(1);
    histogram!("dnsaudit.lookup.duration.seconds").record(duration.as_secs_f64());
}

pub fn record_history(success: bool) {
    let result = if success { "success" } else { "error" };
    counter!("dnsaudit.history.count", "result" => result).increment(1);
}

pub fn record_validation(valid: bool) {
    let valid = if valid { "true" } else { "false" };
    counter!("dnsaudit.validate.count", "valid" => valid).increment(1);
}

pub fn record_connect_attempt(attempt: u32) {
    gauge!("dnsaudit.database.connect_attempts").set(attempt as f64);
}

pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
