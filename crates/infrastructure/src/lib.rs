pub mod database;
pub mod metrics;
pub mod repositories;
pub mod resolver;
