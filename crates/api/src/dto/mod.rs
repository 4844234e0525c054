pub mod error;
pub mod resolution;
pub mod root;
pub mod validate;

pub use error::ErrorResponse;
pub use resolution::{AddressResponse, LookupParams, ResolutionEventResponse};
pub use root::RootResponse;
pub use validate::{ValidateIpRequest, ValidateIpResponse};
