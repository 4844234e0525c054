mod address_resolver;
mod resolution_history_repository;

pub use address_resolver::AddressResolver;
pub use resolution_history_repository::ResolutionHistoryRepository;
