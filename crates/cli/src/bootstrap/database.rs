use dnsaudit_domain::config::DatabaseConfig;
use dnsaudit_infrastructure::database::{
    connect_with_retry, create_pool, ensure_schema, RetryPolicy,
};
use sqlx::PgPool;
use tracing::{error, info};

/// Connects with bounded retries, then makes sure the history table exists.
/// An error here means the service must not start.
pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<PgPool> {
    info!(
        host = %cfg.host,
        port = cfg.port,
        database = %cfg.name,
        user = %cfg.user,
        "Initializing database"
    );

    let pool = connect_with_retry(RetryPolicy::from_config(cfg), |_| create_pool(cfg)).await?;

    ensure_schema(&pool).await.map_err(|e| {
        error!("Failed to create history schema: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!(
        max_connections = cfg.max_connections,
        "Database initialized successfully"
    );

    Ok(pool)
}
