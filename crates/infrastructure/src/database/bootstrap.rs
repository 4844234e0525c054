//! One-shot startup connection with bounded, quadratic backoff.
//!
//! Attempt `n` failing waits `backoff_unit * n²` before attempt `n + 1`.
//! No wait follows the last attempt; exhaustion is returned as
//! [`BootstrapError::Exhausted`] and the caller must not start serving.

use crate::metrics;
use dnsaudit_domain::config::DatabaseConfig;
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Failed to connect to database after {attempts} attempts: {last_error}")]
    Exhausted { attempts: u32, last_error: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff_unit: Duration,
}

impl RetryPolicy {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

    pub fn new(max_attempts: u32, backoff_unit: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff_unit,
        }
    }

    pub fn from_config(cfg: &DatabaseConfig) -> Self {
        Self::new(
            cfg.connect_attempts,
            Duration::from_millis(cfg.backoff_unit_ms),
        )
    }

    /// Wait after failed attempt `attempt` (1-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.backoff_unit
            .saturating_mul(attempt.saturating_mul(attempt))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS, Duration::from_secs(1))
    }
}

pub async fn connect_with_retry<T, E, F, Fut>(
    policy: RetryPolicy,
    mut connect: F,
) -> Result<T, BootstrapError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let max_attempts = policy.max_attempts;
    let mut last_error = String::new();

    info!(max_attempts, "Establishing database connection");

    for attempt in 1..=max_attempts {
        metrics::record_connect_attempt(attempt);

        match connect(attempt).await {
            Ok(conn) => {
                info!(attempt, "Established database connection");
                return Ok(conn);
            }
            Err(e) => {
                warn!(attempt, max_attempts, error = %e, "Database connection attempt failed");
                last_error = e.to_string();
            }
        }

        if attempt < max_attempts {
            tokio::time::sleep(policy.delay_for(attempt)).await;
        }
    }

    error!(
        attempts = max_attempts,
        error = %last_error,
        "Giving up on database connection"
    );

    Err(BootstrapError::Exhausted {
        attempts: max_attempts,
        last_error,
    })
}
