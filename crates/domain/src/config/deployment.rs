use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeploymentConfig {
    /// Running under Kubernetes; only surfaced by the root endpoint
    #[serde(default)]
    pub kubernetes: bool,
}
