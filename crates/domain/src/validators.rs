use crate::DomainError;
use std::net::Ipv4Addr;

/// Reports whether `text` is a dotted-decimal IPv4 address.
///
/// Exactly four decimal octets in `0..=255`, no leading zeros, no surrounding
/// whitespace. IPv6 text (including IPv4-mapped forms) is rejected.
pub fn is_ipv4(text: &str) -> bool {
    text.parse::<Ipv4Addr>().is_ok()
}

/// Lookup only requires a non-empty name; anything else is passed to the resolver as given.
pub fn validate_lookup_domain(domain: Option<&str>) -> Result<&str, DomainError> {
    match domain {
        Some(d) if !d.is_empty() => Ok(d),
        _ => Err(DomainError::InvalidRequest("missing domain".to_string())),
    }
}
