use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub version: String,
    /// Current Unix time, seconds
    pub date: i64,
    pub kubernetes: bool,
}
