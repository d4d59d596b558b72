//! In-memory object store.
//!
//! Deterministic backend used by the test suites and as a local development
//! provider. Listing is paginated in key order with an opaque cursor, so the
//! exhaustive-listing path is exercised exactly as it is against S3.

use std::collections::BTreeMap;
use std::ops::Bound;

use async_trait::async_trait;
use bytes::Bytes;

use qcdocs_core::error::AppError;
use qcdocs_core::result::AppResult;
use qcdocs_core::traits::store::{ListPage, ListRequest, ObjectStore, StoredObject};
use qcdocs_core::types::object::ObjectRecord;

const DEFAULT_PAGE_SIZE: usize = 1000;

/// In-memory object store with cursor-based listing.
#[derive(Debug, Clone)]
pub struct MemoryObjectStore {
    objects: BTreeMap<String, StoredEntry>,
    page_size: usize,
    fail_listing: bool,
}

#[derive(Debug, Clone)]
struct StoredEntry {
    body: Bytes,
    content_type: Option<String>,
}

impl MemoryObjectStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            objects: BTreeMap::new(),
            page_size: DEFAULT_PAGE_SIZE,
            fail_listing: false,
        }
    }

    /// Set the listing page size (to exercise pagination in tests).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Make every listing call fail (to exercise degraded paths in tests).
    pub fn with_listing_failure(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    /// Insert an object with the given content.
    pub fn insert(&mut self, key: impl Into<String>, body: impl Into<Bytes>) {
        self.objects.insert(
            key.into(),
            StoredEntry {
                body: body.into(),
                content_type: None,
            },
        );
    }

    /// Insert an object carrying a store-reported content type.
    pub fn insert_with_content_type(
        &mut self,
        key: impl Into<String>,
        body: impl Into<Bytes>,
        content_type: impl Into<String>,
    ) {
        self.objects.insert(
            key.into(),
            StoredEntry {
                body: body.into(),
                content_type: Some(content_type.into()),
            },
        );
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the store holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for MemoryObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn list(&self, request: ListRequest) -> AppResult<ListPage> {
        if self.fail_listing {
            return Err(AppError::storage("injected listing failure"));
        }

        let prefix = request.prefix.as_deref().unwrap_or("");
        let start = match &request.cursor {
            Some(cursor) => Bound::Excluded(cursor.clone()),
            None => Bound::Unbounded,
        };

        let mut objects = Vec::new();
        let mut cursor = None;
        for (key, entry) in self.objects.range((start, Bound::Unbounded)) {
            if !key.starts_with(prefix) {
                // Keys are sorted; once past the prefix range nothing more
                // can match, but a cursor may land before it, so keep
                // scanning only while the page is empty.
                if objects.is_empty() {
                    continue;
                }
                break;
            }
            if objects.len() == self.page_size {
                cursor = objects.last().map(|r: &ObjectRecord| r.key.clone());
                break;
            }
            objects.push(ObjectRecord::new(key.clone(), entry.body.len() as u64));
        }

        Ok(ListPage { objects, cursor })
    }

    async fn get(&self, key: &str) -> AppResult<Option<StoredObject>> {
        Ok(self.objects.get(key).map(|entry| StoredObject {
            body: Box::pin(futures::stream::iter([Ok(entry.body.clone())])),
            size: entry.body.len() as u64,
            content_type: entry.content_type.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_keys(keys: &[&str]) -> MemoryObjectStore {
        let mut store = MemoryObjectStore::new();
        for key in keys {
            store.insert(*key, Bytes::from_static(b"x"));
        }
        store
    }

    #[tokio::test]
    async fn test_list_is_prefix_filtered_and_sorted() {
        let store = store_with_keys(&["b/2.txt", "a/1.txt", "b/1.txt"]);

        let page = store
            .list(ListRequest::with_prefix("b/"))
            .await
            .expect("list");
        let keys: Vec<_> = page.objects.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["b/1.txt", "b/2.txt"]);
        assert!(page.cursor.is_none());
    }

    #[tokio::test]
    async fn test_list_paginates_with_cursor() {
        let store =
            store_with_keys(&["k/1", "k/2", "k/3", "k/4", "k/5"]).with_page_size(2);

        let mut cursor = None;
        let mut seen = Vec::new();
        let mut pages = 0;
        loop {
            let page = store
                .list(ListRequest {
                    prefix: Some("k/".to_string()),
                    cursor: cursor.clone(),
                })
                .await
                .expect("list");
            seen.extend(page.objects.into_iter().map(|r| r.key));
            pages += 1;
            match page.cursor {
                Some(c) => cursor = Some(c),
                None => break,
            }
        }

        assert_eq!(pages, 3);
        assert_eq!(seen, ["k/1", "k/2", "k/3", "k/4", "k/5"]);
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let store = store_with_keys(&["a.txt"]);
        assert!(store.get("b.txt").await.expect("get").is_none());
        assert!(store.get("a.txt").await.expect("get").is_some());
    }

    #[tokio::test]
    async fn test_get_reports_stored_content_type() {
        let mut store = MemoryObjectStore::new();
        assert!(store.is_empty());

        store.insert("plain.bin", Bytes::from_static(b"x"));
        store.insert_with_content_type(
            "typed.bin",
            Bytes::from_static(b"xy"),
            "application/octet-stream",
        );
        assert_eq!(store.len(), 2);

        let typed = store.get("typed.bin").await.expect("get").expect("stored");
        assert_eq!(
            typed.content_type.as_deref(),
            Some("application/octet-stream")
        );

        let plain = store.get("plain.bin").await.expect("get").expect("stored");
        assert!(plain.content_type.is_none());
    }

    #[tokio::test]
    async fn test_injected_listing_failure() {
        let store = store_with_keys(&["a.txt"]).with_listing_failure();
        assert!(store.list(ListRequest::default()).await.is_err());
    }
}
