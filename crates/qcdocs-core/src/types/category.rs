//! Document categories and file-type classification.

use serde::{Deserialize, Serialize};

/// Image file extensions recognized by the photo categories and tree stats.
pub const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".bmp", ".webp"];

/// The four fixed document/photo categories of the bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// QC checklist PDFs.
    QcCheckList,
    /// Electronic expansion valve photos.
    EevPhotos,
    /// Case controller photos.
    CaseControllerPhotos,
    /// Showcase photos.
    ShowcasePhotos,
}

/// File-type test applied to a category's keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// `.pdf` files.
    Pdf,
    /// Files with one of [`IMAGE_EXTENSIONS`].
    Image,
}

impl FileKind {
    /// Case-insensitive extension test against a key or file name.
    pub fn matches(self, key: &str) -> bool {
        let lower = key.to_lowercase();
        match self {
            Self::Pdf => lower.ends_with(".pdf"),
            Self::Image => IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)),
        }
    }
}

/// A category's root prefix and file-type filter.
///
/// Passed to the search service as configuration so the classification can
/// be exercised in tests without a live bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpec {
    /// Which result list this spec populates.
    pub category: Category,
    /// Key prefix all objects of this category live under.
    pub root_prefix: String,
    /// File-type filter for the category.
    pub file_kind: FileKind,
}

impl CategorySpec {
    /// Create a category spec.
    pub fn new(category: Category, root_prefix: impl Into<String>, file_kind: FileKind) -> Self {
        Self {
            category,
            root_prefix: root_prefix.into(),
            file_kind,
        }
    }

    /// The fixed category layout of the QC bucket.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(Category::QcCheckList, "1. QC check list/", FileKind::Pdf),
            Self::new(Category::EevPhotos, "2. Photo/1.EEV/", FileKind::Image),
            Self::new(
                Category::CaseControllerPhotos,
                "2. Photo/2.Case controller/",
                FileKind::Image,
            ),
            Self::new(
                Category::ShowcasePhotos,
                "2. Photo/3.Showcase photo/",
                FileKind::Image,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_matching_is_case_insensitive() {
        assert!(FileKind::Pdf.matches("a/b/REPORT.PDF"));
        assert!(FileKind::Pdf.matches("a/b/report.pdf"));
        assert!(!FileKind::Pdf.matches("a/b/report.pdf.bak"));
        assert!(!FileKind::Pdf.matches("a/b/photo.jpg"));
    }

    #[test]
    fn test_image_extension_set() {
        for name in ["a.jpg", "a.JPEG", "a.png", "a.gif", "a.bmp", "a.WEBP"] {
            assert!(FileKind::Image.matches(name), "{name} should be an image");
        }
        assert!(!FileKind::Image.matches("a.pdf"));
        assert!(!FileKind::Image.matches("a.tiff"));
    }

    #[test]
    fn test_default_specs_cover_all_categories() {
        let specs = CategorySpec::defaults();
        assert_eq!(specs.len(), 4);
        assert_eq!(specs[0].root_prefix, "1. QC check list/");
        assert_eq!(specs[0].file_kind, FileKind::Pdf);
        assert!(
            specs[1..]
                .iter()
                .all(|spec| spec.file_kind == FileKind::Image)
        );
    }
}
