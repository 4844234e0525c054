pub mod health;
pub mod history;
pub mod lookup;
pub mod metrics;
pub mod root;
pub mod swagger;
pub mod validate;

pub use health::health_check;
pub use history::get_history;
pub use lookup::lookup_domain;
pub use metrics::render_metrics;
pub use root::get_root;
pub use swagger::get_swagger;
pub use validate::validate_ip;

use crate::errors::ApiError;
use axum::http::Method;
use tracing::warn;

/// Fallback for routes that exist but not for this verb.
pub async fn method_not_allowed(method: Method) -> ApiError {
    warn!(method = %method, "Method not allowed");
    ApiError::bad_request("Method not allowed")
}
