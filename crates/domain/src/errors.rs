use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Failed to resolve domain: {0}")]
    ResolutionFailed(String),

    #[error("Resolution of {0} timed out")]
    ResolutionTimeout(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupt history record: {0}")]
    CorruptRecord(String),
}

impl DomainError {
    /// True for failures caused by the queried name, not by this service.
    pub fn is_resolution_failure(&self) -> bool {
        matches!(
            self,
            DomainError::ResolutionFailed(_) | DomainError::ResolutionTimeout(_)
        )
    }
}
