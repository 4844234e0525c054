use serde::{Deserialize, Serialize};

/// PostgreSQL connection settings for the resolution history
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default)]
    pub password: String,

    /// Pool size shared by all request handlers (default: 10)
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Startup connection attempts before giving up (default: 5)
    #[serde(default = "default_connect_attempts")]
    pub connect_attempts: u32,

    /// Backoff unit in milliseconds; attempt n waits n² units (default: 1000)
    #[serde(default = "default_backoff_unit_ms")]
    pub backoff_unit_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            name: default_name(),
            user: default_user(),
            password: String::new(),
            max_connections: default_max_connections(),
            connect_attempts: default_connect_attempts(),
            backoff_unit_ms: default_backoff_unit_ms(),
        }
    }
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5432
}

fn default_name() -> String {
    "postgres".to_string()
}

fn default_user() -> String {
    "postgres".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_connect_attempts() -> u32 {
    5
}

fn default_backoff_unit_ms() -> u64 {
    1000
}
