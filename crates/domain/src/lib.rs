//! DNS audit domain layer
pub mod config;
pub mod errors;
pub mod resolution_event;
pub mod validators;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use resolution_event::ResolutionEvent;
pub use validators::{is_ipv4, validate_lookup_domain};
