use anyhow::Context;
use dnsaudit_domain::config::LoggingConfig;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing::info;

/// Logs go to the configured file (appended, no colours) or to stdout.
/// Failing to open the file is fatal.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let log_level = config.level.parse().unwrap_or(tracing::Level::INFO);

    let subscriber = tracing_subscriber::fmt()
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_max_level(log_level);

    match config.file_path() {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("error opening log file {}", path))?;
            subscriber
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => subscriber.with_ansi(true).init(),
    }

    info!(
        level = %config.level,
        file = config.file_path().unwrap_or("stdout"),
        "Logging initialized"
    );
    Ok(())
}
