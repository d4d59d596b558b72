//! Wildcard search handler.

use axum::Json;
use axum::extract::State;

use qcdocs_core::types::object::{SearchQuery, SearchResults};

use crate::state::AppState;

/// POST /search
pub async fn search(
    State(state): State<AppState>,
    Json(query): Json<SearchQuery>,
) -> Json<SearchResults> {
    tracing::info!(
        po = query.po_pattern().unwrap_or("-"),
        sn = query.sn_pattern().unwrap_or("-"),
        "Search request"
    );

    Json(state.search.search(&query).await)
}
