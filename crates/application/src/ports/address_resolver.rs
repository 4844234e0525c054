use async_trait::async_trait;
use dnsaudit_domain::DomainError;
use std::net::Ipv4Addr;

#[async_trait]
pub trait AddressResolver: Send + Sync {
    /// Forward lookup restricted to IPv4, one attempt, no caching.
    ///
    /// Returns a non-empty list in resolver order, or
    /// `ResolutionFailed` / `ResolutionTimeout`.
    async fn resolve_ipv4(&self, domain: &str) -> Result<Vec<Ipv4Addr>, DomainError>;
}
