//! Tree structure handler.

use axum::Json;
use axum::extract::State;
use chrono::Utc;

use qcdocs_service::build_tree;
use qcdocs_service::lister::list_all;

use crate::dto::response::TreeResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /tree-structure
///
/// Unlike search, a listing failure here fails the whole request: without
/// the full listing there is no tree to show.
pub async fn tree_structure(
    State(state): State<AppState>,
) -> Result<Json<TreeResponse>, ApiError> {
    let records = list_all(state.store.as_ref(), "").await?;

    tracing::info!(total = records.len(), "Building tree structure");
    let built = build_tree(&records);

    Ok(Json(TreeResponse {
        tree: built.tree,
        stats: built.stats,
        timestamp: Utc::now(),
    }))
}
