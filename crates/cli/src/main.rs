//! # dnsaudit
//!
//! Resolves domains to IPv4 addresses and keeps an audit trail in PostgreSQL

mod bootstrap;
mod di;
mod server;

use anyhow::Context;
use clap::Parser;
use dnsaudit_api::{create_api_routes, AppState};
use dnsaudit_domain::CliOverrides;
use dnsaudit_infrastructure::{metrics, resolver::SystemAddressResolver};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use bootstrap::{init_database, init_logging, load_config};
use di::{Repositories, UseCases};
use server::{spawn_signal_listener, start_web_server};

#[derive(Parser)]
#[command(name = "dnsaudit")]
#[command(version)]
#[command(about = "Domain lookup service with a lookup history")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// HTTP port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(
        cli.config.as_deref(),
        CliOverrides {
            port: cli.port,
            bind_address: cli.bind,
            log_level: cli.log_level,
        },
    )?;

    init_logging(&config.logging)?;

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        port = config.server.port,
        bind = %config.server.bind_address,
        kubernetes = config.deployment.kubernetes,
        "Configuration loaded"
    );

    let metrics_handle =
        metrics::install_recorder().context("failed to install metrics recorder")?;

    let pool = init_database(&config.database).await?;

    let repos = Repositories::new(pool.clone());
    let resolver = Arc::new(SystemAddressResolver::from_config(&config.resolver));
    let use_cases = UseCases::new(&repos, resolver);

    let state = AppState {
        lookup: use_cases.lookup,
        get_history: use_cases.get_history,
        metrics: metrics_handle,
        kubernetes: config.deployment.kubernetes,
    };

    let bind_ip: IpAddr = config
        .server
        .bind_address
        .parse()
        .with_context(|| format!("invalid bind address {}", config.server.bind_address))?;
    let bind_addr = SocketAddr::new(bind_ip, config.server.port);

    let shutdown = CancellationToken::new();
    spawn_signal_listener(shutdown.clone());

    let drain_window = Duration::from_secs(config.server.shutdown_grace_secs);
    start_web_server(bind_addr, create_api_routes(state), shutdown, drain_window).await?;

    if tokio::time::timeout(drain_window, pool.close()).await.is_err() {
        warn!("Database pool did not close within the drain window");
    }
    info!("Shutdown complete");
    Ok(())
}
