pub mod history;
pub mod lookup;

pub use history::{GetHistoryUseCase, HISTORY_LIMIT};
pub use lookup::LookupDomainUseCase;
