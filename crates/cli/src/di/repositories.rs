use dnsaudit_infrastructure::repositories::PgResolutionHistoryRepository;
use sqlx::PgPool;
use std::sync::Arc;

pub struct Repositories {
    pub history: Arc<PgResolutionHistoryRepository>,
}

impl Repositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            history: Arc::new(PgResolutionHistoryRepository::new(pool)),
        }
    }
}
