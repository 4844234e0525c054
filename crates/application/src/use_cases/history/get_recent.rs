use crate::ports::ResolutionHistoryRepository;
use dnsaudit_domain::{DomainError, ResolutionEvent};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Fixed window served by the history endpoint.
pub const HISTORY_LIMIT: u32 = 20;

pub struct GetHistoryUseCase {
    repository: Arc<dyn ResolutionHistoryRepository>,
}

impl GetHistoryUseCase {
    pub fn new(repository: Arc<dyn ResolutionHistoryRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<Vec<ResolutionEvent>, DomainError> {
        let events = self.repository.get_recent(HISTORY_LIMIT).await?;
        debug!(count = events.len(), "Resolution history fetched");
        Ok(events)
    }
}
