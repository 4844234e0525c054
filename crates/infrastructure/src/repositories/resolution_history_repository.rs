use super::address_codec::{decode_addresses, encode_addresses};
use async_trait::async_trait;
use dnsaudit_application::ports::ResolutionHistoryRepository;
use dnsaudit_domain::{DomainError, ResolutionEvent};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::{debug, error, instrument};

type HistoryRow = (String, String, String, i64);

pub struct PgResolutionHistoryRepository {
    pool: PgPool,
}

impl PgResolutionHistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_event(row: HistoryRow) -> Result<ResolutionEvent, DomainError> {
        let (domain, client_ip, addresses, created_at) = row;

        Ok(ResolutionEvent {
            domain: Arc::from(domain.as_str()),
            client_ip: Arc::from(client_ip.as_str()),
            addresses: decode_addresses(&addresses)?,
            created_at,
        })
    }
}

#[async_trait]
impl ResolutionHistoryRepository for PgResolutionHistoryRepository {
    #[instrument(skip(self, event), fields(domain = %event.domain))]
    async fn append(&self, event: &ResolutionEvent) -> Result<(), DomainError> {
        let addresses = encode_addresses(&event.addresses)?;

        sqlx::query(
            "INSERT INTO query_history (domain, client_ip, addresses, created_at)
             VALUES ($1, $2, $3, to_timestamp($4))",
        )
        .bind(event.domain.as_ref())
        .bind(event.client_ip.as_ref())
        .bind(&addresses)
        .bind(event.created_at as f64)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to insert history entry");
            DomainError::DatabaseError(e.to_string())
        })?;

        debug!(addresses = %addresses, "History entry inserted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_recent(&self, limit: u32) -> Result<Vec<ResolutionEvent>, DomainError> {
        let rows = sqlx::query_as::<_, HistoryRow>(
            "SELECT domain, client_ip, addresses,
                    EXTRACT(EPOCH FROM created_at)::BIGINT AS created_at
             FROM query_history
             ORDER BY query_history.created_at DESC, id DESC
             LIMIT $1",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch history");
            DomainError::DatabaseError(e.to_string())
        })?;

        let events = rows
            .into_iter()
            .map(Self::row_to_event)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                error!(error = %e, "Failed to decode history row");
                e
            })?;

        debug!(count = events.len(), "History fetched");
        Ok(events)
    }
}
