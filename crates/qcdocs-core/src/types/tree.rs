//! Folder/file tree nodes and aggregate statistics.

use serde::{Deserialize, Serialize};

/// A node in the reconstructed folder tree.
///
/// Serialized with a `type` tag (`"folder"` / `"file"`) matching the wire
/// format the frontend consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    /// A folder with its children.
    Folder {
        /// Folder name (single path segment).
        name: String,
        /// Slash-joined path from the root to this folder.
        path: String,
        /// Child nodes, folders first.
        children: Vec<TreeNode>,
    },
    /// A file leaf.
    File {
        /// File name (last path segment).
        name: String,
        /// Full object key.
        path: String,
        /// Size in bytes.
        size: u64,
    },
}

impl TreeNode {
    /// The node's own name.
    pub fn name(&self) -> &str {
        match self {
            Self::Folder { name, .. } | Self::File { name, .. } => name,
        }
    }

    /// Whether this node is a folder.
    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder { .. })
    }
}

/// Aggregate counts computed while folding the flat listing into a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeStats {
    /// Number of file leaves.
    pub total_files: u64,
    /// Number of distinct folders created.
    pub total_folders: u64,
    /// Files classified as PDF.
    pub pdf_files: u64,
    /// Files classified as images (and not PDF).
    pub image_files: u64,
}
