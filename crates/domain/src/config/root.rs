use super::{
    ConfigError, DatabaseConfig, DeploymentConfig, LoggingConfig, ResolverConfig, ServerConfig,
};
use serde::{Deserialize, Serialize};

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub deployment: DeploymentConfig,
}

/// Values passed on the command line; they win over every other source.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Defaults, then the TOML file, then the process environment, then CLI flags.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };

        config.apply_env_with(|name| std::env::var(name).ok())?;
        config.apply_cli_overrides(overrides);

        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Applies `DB_*`, `KUBERNETES`, `LOG_LEVEL` and `LOG_FILE`.
    /// Unset variables leave the current value alone.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("DB_HOST") {
            self.database.host = host;
        }
        if let Some(port) = lookup("DB_PORT") {
            self.database.port = port.parse().map_err(|_| ConfigError::Environment {
                name: "DB_PORT",
                value: port.clone(),
            })?;
        }
        if let Some(name) = lookup("DB_NAME") {
            self.database.name = name;
        }
        if let Some(user) = lookup("DB_USER") {
            self.database.user = user;
        }
        if let Some(password) = lookup("DB_PASSWORD") {
            self.database.password = password;
        }
        if let Some(flag) = lookup("KUBERNETES") {
            self.deployment.kubernetes = flag.eq_ignore_ascii_case("yes");
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(file) = lookup("LOG_FILE") {
            self.logging.file = file;
        }
        Ok(())
    }

    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port must be greater than 0".to_string(),
            ));
        }
        if self.database.host.is_empty() {
            return Err(ConfigError::Validation(
                "database.host cannot be empty".to_string(),
            ));
        }
        if self.database.name.is_empty() {
            return Err(ConfigError::Validation(
                "database.name cannot be empty".to_string(),
            ));
        }
        if self.database.connect_attempts == 0 {
            return Err(ConfigError::Validation(
                "database.connect_attempts must be at least 1".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "database.max_connections must be at least 1".to_string(),
            ));
        }
        if self.resolver.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "resolver.timeout_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
