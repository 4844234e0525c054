mod address_codec;
pub mod resolution_history_repository;

pub use resolution_history_repository::PgResolutionHistoryRepository;
