//! Exhaustive key listing over a paginated object store.

use qcdocs_core::result::AppResult;
use qcdocs_core::traits::store::{ListRequest, ObjectStore};
use qcdocs_core::types::object::ObjectRecord;

/// List every object under `prefix`, following continuation cursors until
/// the store reports the end of the listing.
///
/// Zero matches is an empty `Ok`. A store failure on any page aborts the
/// whole listing and returns `Err`; records gathered from earlier pages are
/// discarded, and the caller decides whether to degrade or propagate.
pub async fn list_all(store: &dyn ObjectStore, prefix: &str) -> AppResult<Vec<ObjectRecord>> {
    let mut records = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = store
            .list(ListRequest {
                prefix: (!prefix.is_empty()).then(|| prefix.to_string()),
                cursor: cursor.take(),
            })
            .await?;

        records.extend(page.objects);

        match page.cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    Ok(records)
}
