use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

/// One recorded domain lookup.
/// Immutable once persisted; the repository never updates or deletes rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionEvent {
    pub domain: Arc<str>,
    /// Requester address, IP only (no port).
    pub client_ip: Arc<str>,
    /// Resolver order is preserved on write and read.
    pub addresses: Vec<Ipv4Addr>,
    /// Unix timestamp, seconds.
    pub created_at: i64,
}

impl ResolutionEvent {
    pub fn new(
        domain: impl Into<Arc<str>>,
        client_ip: IpAddr,
        addresses: Vec<Ipv4Addr>,
        created_at: i64,
    ) -> Self {
        Self {
            domain: domain.into(),
            client_ip: Arc::from(client_ip.to_string().as_str()),
            addresses,
            created_at,
        }
    }
}
