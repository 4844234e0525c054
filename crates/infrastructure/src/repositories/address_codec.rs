//! Address list <-> JSON text column.

use dnsaudit_domain::DomainError;
use std::net::Ipv4Addr;

pub(crate) fn encode_addresses(addresses: &[Ipv4Addr]) -> Result<String, DomainError> {
    serde_json::to_string(addresses)
        .map_err(|e| DomainError::DatabaseError(format!("Failed to encode addresses: {}", e)))
}

/// A stored event always has at least one address; an empty array is corruption.
pub(crate) fn decode_addresses(blob: &str) -> Result<Vec<Ipv4Addr>, DomainError> {
    let addresses: Vec<Ipv4Addr> = serde_json::from_str(blob)
        .map_err(|e| DomainError::CorruptRecord(format!("addresses {:?}: {}", blob, e)))?;

    if addresses.is_empty() {
        return Err(DomainError::CorruptRecord(
            "addresses column holds an empty list".to_string(),
        ));
    }

    Ok(addresses)
}
