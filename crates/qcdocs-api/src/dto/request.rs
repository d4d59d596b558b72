//! Request DTOs.
//!
//! The search request body is [`qcdocs_core::types::object::SearchQuery`]
//! itself; only the file endpoints need their own shapes.

use serde::{Deserialize, Serialize};

/// Query parameters of `GET /file`.
#[derive(Debug, Clone, Deserialize)]
pub struct FileQuery {
    /// Object key to stream.
    pub path: Option<String>,
}

/// Body of `POST /file`.
///
/// `path` is optional at the wire level so an absent field fails request
/// validation rather than body deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadRequest {
    /// Object key to download.
    #[serde(default)]
    pub path: Option<String>,
}
