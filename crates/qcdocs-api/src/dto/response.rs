//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use qcdocs_core::types::tree::{TreeNode, TreeStats};

/// Body of `GET /tree-structure`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeResponse {
    /// Top-level nodes of the reconstructed tree.
    pub tree: Vec<TreeNode>,
    /// Aggregate counts.
    pub stats: TreeStats,
    /// When this snapshot was taken.
    pub timestamp: DateTime<Utc>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Server version.
    pub version: String,
}
