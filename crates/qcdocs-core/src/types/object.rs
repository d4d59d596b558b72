//! Object records, search queries, and search results.

use serde::{Deserialize, Serialize};

use super::category::Category;

/// A single object in the backing store.
///
/// Keys are `/`-delimited paths such as
/// `"1. QC check list/PO2122244/file.pdf"`; the final segment is the file
/// name. A key ending with `/` is a folder marker, not a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRecord {
    /// Full object key within the bucket.
    pub key: String,
    /// Size in bytes.
    pub size: u64,
}

impl ObjectRecord {
    /// Create a new object record.
    pub fn new(key: impl Into<String>, size: u64) -> Self {
        Self {
            key: key.into(),
            size,
        }
    }

    /// The file name: everything after the last `/`.
    pub fn file_name(&self) -> &str {
        file_name_of(&self.key)
    }

    /// Whether this key is a folder marker rather than a file.
    pub fn is_folder_marker(&self) -> bool {
        self.key.ends_with('/')
    }
}

/// The file-name portion of an object key.
pub fn file_name_of(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}

/// A search request: optional PO and SN wildcard fragments.
///
/// The origin frontend sends empty strings for untouched fields, so a blank
/// value counts as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Purchase-order fragment, matched against the PO folder segment.
    #[serde(default)]
    pub po_number: Option<String>,
    /// Serial-number fragment, matched against the whole key.
    #[serde(default)]
    pub sn_number: Option<String>,
}

impl SearchQuery {
    /// The PO pattern, if one was actually supplied.
    pub fn po_pattern(&self) -> Option<&str> {
        present(self.po_number.as_deref())
    }

    /// The SN pattern, if one was actually supplied.
    pub fn sn_pattern(&self) -> Option<&str> {
        present(self.sn_number.as_deref())
    }

    /// True when neither fragment was supplied.
    pub fn is_empty(&self) -> bool {
        self.po_pattern().is_none() && self.sn_pattern().is_none()
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// A single search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// File name (last path segment).
    pub name: String,
    /// Full object key.
    pub path: String,
}

impl From<&ObjectRecord> for MatchResult {
    fn from(record: &ObjectRecord) -> Self {
        Self {
            name: record.file_name().to_string(),
            path: record.key.clone(),
        }
    }
}

/// Search results, one list per document category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    /// QC check list PDFs.
    pub qc_check_list: Vec<MatchResult>,
    /// EEV photos.
    pub eev_photos: Vec<MatchResult>,
    /// Case controller photos.
    pub case_controller_photos: Vec<MatchResult>,
    /// Showcase photos.
    pub showcase_photos: Vec<MatchResult>,
}

impl SearchResults {
    /// Mutable access to the result list for a category.
    pub fn category_mut(&mut self, category: Category) -> &mut Vec<MatchResult> {
        match category {
            Category::QcCheckList => &mut self.qc_check_list,
            Category::EevPhotos => &mut self.eev_photos,
            Category::CaseControllerPhotos => &mut self.case_controller_photos,
            Category::ShowcasePhotos => &mut self.showcase_photos,
        }
    }

    /// Read access to the result list for a category.
    pub fn category(&self, category: Category) -> &[MatchResult] {
        match category {
            Category::QcCheckList => &self.qc_check_list,
            Category::EevPhotos => &self.eev_photos,
            Category::CaseControllerPhotos => &self.case_controller_photos,
            Category::ShowcasePhotos => &self.showcase_photos,
        }
    }
}
