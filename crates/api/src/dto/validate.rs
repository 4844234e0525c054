use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ValidateIpRequest {
    /// A missing field validates as an empty string
    #[serde(default)]
    pub ip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateIpResponse {
    pub status: bool,
}
