use async_trait::async_trait;
use dnsaudit_domain::{DomainError, ResolutionEvent};

#[async_trait]
pub trait ResolutionHistoryRepository: Send + Sync {
    /// Insert one event as a single atomic statement
    async fn append(&self, event: &ResolutionEvent) -> Result<(), DomainError>;

    /// Up to `limit` events, newest first
    async fn get_recent(&self, limit: u32) -> Result<Vec<ResolutionEvent>, DomainError>;
}
