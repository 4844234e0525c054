use async_trait::async_trait;
use dnsaudit_application::ports::AddressResolver;
use dnsaudit_domain::config::ResolverConfig;
use dnsaudit_domain::DomainError;
use std::future::Future;
use std::io;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;
use tracing::debug;

/// Host resolver (getaddrinfo via `tokio::net::lookup_host`), IPv4 only.
pub struct SystemAddressResolver {
    timeout: Duration,
}

impl SystemAddressResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn from_config(cfg: &ResolverConfig) -> Self {
        Self::new(Duration::from_millis(cfg.timeout_ms))
    }
}

#[async_trait]
impl AddressResolver for SystemAddressResolver {
    async fn resolve_ipv4(&self, domain: &str) -> Result<Vec<Ipv4Addr>, DomainError> {
        lookup_within(domain, self.timeout, tokio::net::lookup_host((domain, 0))).await
    }
}

/// Runs `lookup` for `domain` under `timeout` and keeps the IPv4 answers.
async fn lookup_within<F, I>(
    domain: &str,
    timeout: Duration,
    lookup: F,
) -> Result<Vec<Ipv4Addr>, DomainError>
where
    F: Future<Output = io::Result<I>>,
    I: IntoIterator<Item = SocketAddr>,
{
    let addrs = tokio::time::timeout(timeout, lookup)
        .await
        .map_err(|_| DomainError::ResolutionTimeout(domain.to_string()))?
        .map_err(|e| DomainError::ResolutionFailed(format!("{}: {}", domain, e)))?;

    let addresses = ipv4_only(addrs);

    if addresses.is_empty() {
        return Err(DomainError::ResolutionFailed(format!(
            "{}: no IPv4 addresses",
            domain
        )));
    }

    debug!(domain = %domain, count = addresses.len(), "Resolved IPv4 addresses");
    Ok(addresses)
}

/// Keeps IPv4 results in resolver order, dropping repeats.
fn ipv4_only(addrs: impl IntoIterator<Item = SocketAddr>) -> Vec<Ipv4Addr> {
    let mut out: Vec<Ipv4Addr> = Vec::new();
    for addr in addrs {
        if let SocketAddr::V4(v4) = addr {
            if !out.contains(v4.ip()) {
                out.push(*v4.ip());
            }
        }
    }
    out
}
