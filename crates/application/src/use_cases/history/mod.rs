mod get_recent;

pub use get_recent::{GetHistoryUseCase, HISTORY_LIMIT};
