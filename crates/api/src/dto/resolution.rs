use dnsaudit_domain::ResolutionEvent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct LookupParams {
    pub domain: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressResponse {
    pub ip: String,
}

/// Body of a successful lookup and of each history entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionEventResponse {
    pub domain: String,
    pub addresses: Vec<AddressResponse>,
    pub created_at: i64,
    pub client_ip: String,
}

impl From<ResolutionEvent> for ResolutionEventResponse {
    fn from(event: ResolutionEvent) -> Self {
        Self {
            domain: event.domain.to_string(),
            addresses: event
                .addresses
                .iter()
                .map(|ip| AddressResponse { ip: ip.to_string() })
                .collect(),
            created_at: event.created_at,
            client_ip: event.client_ip.to_string(),
        }
    }
}
