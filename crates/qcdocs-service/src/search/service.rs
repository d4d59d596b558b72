//! Category search over the object store.

use std::sync::Arc;

use qcdocs_core::traits::store::ObjectStore;
use qcdocs_core::types::category::CategorySpec;
use qcdocs_core::types::object::{MatchResult, SearchQuery, SearchResults};

use crate::lister::list_all;
use crate::search::matcher::{MatchMode, wildcard_match};

/// Searches the bucket's document categories with PO/SN wildcard fragments.
///
/// The category layout is injected so the classification can be exercised
/// against any store.
#[derive(Debug, Clone)]
pub struct SearchService {
    store: Arc<dyn ObjectStore>,
    categories: Vec<CategorySpec>,
}

impl SearchService {
    /// Create a search service with an explicit category layout.
    pub fn new(store: Arc<dyn ObjectStore>, categories: Vec<CategorySpec>) -> Self {
        Self { store, categories }
    }

    /// Create a search service with the fixed QC bucket layout.
    pub fn with_default_categories(store: Arc<dyn ObjectStore>) -> Self {
        Self::new(store, CategorySpec::defaults())
    }

    /// Run a search. With neither fragment supplied every category stays
    /// empty; otherwise a record must pass its category's file-type test
    /// and every supplied fragment (logical AND).
    ///
    /// A listing failure for one category degrades to an empty result list
    /// for that category instead of failing the whole search. Result order
    /// within a category is listing order.
    pub async fn search(&self, query: &SearchQuery) -> SearchResults {
        let mut results = SearchResults::default();
        if query.is_empty() {
            return results;
        }

        let po = query.po_pattern();
        let sn = query.sn_pattern();

        for spec in &self.categories {
            let records = match list_all(self.store.as_ref(), &spec.root_prefix).await {
                Ok(records) => records,
                Err(error) => {
                    tracing::warn!(
                        category = ?spec.category,
                        prefix = %spec.root_prefix,
                        %error,
                        "Category listing failed; returning no matches for it"
                    );
                    continue;
                }
            };

            let matches = records
                .iter()
                .filter(|record| spec.file_kind.matches(&record.key))
                .filter(|record| {
                    po.is_none_or(|pattern| wildcard_match(&record.key, pattern, MatchMode::Po))
                })
                .filter(|record| {
                    sn.is_none_or(|pattern| wildcard_match(&record.key, pattern, MatchMode::Sn))
                })
                .map(MatchResult::from)
                .collect();

            *results.category_mut(spec.category) = matches;
        }

        results
    }
}
