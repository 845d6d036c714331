use serde::{Deserialize, Serialize};

/// Where the file-backed lookup reads subnets from
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InventoryConfig {
    /// Path to a JSON inventory (`{"subnets": [...]}`)
    #[serde(default)]
    pub path: Option<String>,
}
