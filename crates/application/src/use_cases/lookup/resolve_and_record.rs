use crate::ports::{AddressResolver, ResolutionHistoryRepository};
use dnsaudit_domain::{validate_lookup_domain, DomainError, ResolutionEvent};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Resolves a domain and records the event.
///
/// Failed resolutions are never persisted. A store failure after a successful
/// resolution is returned as an error: the caller must not assume the lookup
/// was recorded.
pub struct LookupDomainUseCase {
    resolver: Arc<dyn AddressResolver>,
    repository: Arc<dyn ResolutionHistoryRepository>,
}

impl LookupDomainUseCase {
    pub fn new(
        resolver: Arc<dyn AddressResolver>,
        repository: Arc<dyn ResolutionHistoryRepository>,
    ) -> Self {
        Self {
            resolver,
            repository,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        domain: Option<&str>,
        client_ip: IpAddr,
    ) -> Result<ResolutionEvent, DomainError> {
        let domain = validate_lookup_domain(domain)?;

        let addresses = self.resolver.resolve_ipv4(domain).await.map_err(|e| {
            warn!(domain = %domain, client_ip = %client_ip, error = %e, "Resolution failed");
            e
        })?;

        let event = ResolutionEvent::new(
            domain,
            client_ip,
            addresses,
            chrono::Utc::now().timestamp(),
        );

        self.repository.append(&event).await.map_err(|e| {
            error!(
                domain = %domain,
                client_ip = %client_ip,
                addresses = ?event.addresses,
                error = %e,
                "Resolved but failed to record lookup"
            );
            e
        })?;

        info!(
            domain = %domain,
            client_ip = %client_ip,
            count = event.addresses.len(),
            created_at = event.created_at,
            "Lookup recorded"
        );

        Ok(event)
    }
}
