//! Object store trait for pluggable bucket backends.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

use crate::result::AppResult;
use crate::types::object::ObjectRecord;

/// A byte stream type used for reading object contents.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send>>;

/// Parameters for one page of a listing.
#[derive(Debug, Clone, Default)]
pub struct ListRequest {
    /// Restrict the listing to keys starting with this prefix.
    pub prefix: Option<String>,
    /// Continuation cursor from the previous page.
    pub cursor: Option<String>,
}

impl ListRequest {
    /// A listing request for the given prefix, starting from the beginning.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            prefix: (!prefix.is_empty()).then_some(prefix),
            cursor: None,
        }
    }
}

/// One page of listing results.
///
/// An absent cursor signals the end of the listing.
#[derive(Debug, Clone, Default)]
pub struct ListPage {
    /// Records in this page.
    pub objects: Vec<ObjectRecord>,
    /// Cursor for the next page, if any.
    pub cursor: Option<String>,
}

/// A retrieved object ready for streaming.
pub struct StoredObject {
    /// Object content stream.
    pub body: ByteStream,
    /// Size in bytes.
    pub size: u64,
    /// Content type reported by the store, if any.
    pub content_type: Option<String>,
}

impl std::fmt::Debug for StoredObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredObject")
            .field("size", &self.size)
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}

/// Trait for read-only bucket backends.
///
/// The trait is defined here in `qcdocs-core` and implemented in
/// `qcdocs-storage` (S3-compatible and in-memory providers).
#[async_trait]
pub trait ObjectStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "s3", "memory").
    fn provider_type(&self) -> &str;

    /// List one page of object records.
    async fn list(&self, request: ListRequest) -> AppResult<ListPage>;

    /// Fetch an object for streaming. `Ok(None)` signals not-found.
    async fn get(&self, key: &str) -> AppResult<Option<StoredObject>>;
}
