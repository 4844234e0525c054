//! Configuration module for the DNS audit service
//!
//! - `root`: main configuration, environment and CLI overrides
//! - `server`: HTTP binding and shutdown drain window
//! - `database`: PostgreSQL connection and bootstrap retry policy
//! - `resolver`: system resolver timeout
//! - `logging`: log level and access log file
//! - `deployment`: orchestration flag reported by the root endpoint
//! - `errors`: configuration errors

pub mod database;
pub mod deployment;
pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod server;

pub use database::DatabaseConfig;
pub use deployment::DeploymentConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
