//! Builds the nested folder/file tree from a flat object listing.
//!
//! Folder nodes live in an arena indexed by cumulative path, so a folder
//! seen in many keys is created exactly once and ownership of the
//! parent→children edges stays explicit until the tree is materialized.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::mem;

use qcdocs_core::types::category::FileKind;
use qcdocs_core::types::object::ObjectRecord;
use qcdocs_core::types::tree::{TreeNode, TreeStats};

use crate::tree::order::natural_cmp;

/// The reconstructed tree plus the stats gathered in the same pass.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltTree {
    /// Top-level nodes (the implicit root folder's children).
    pub tree: Vec<TreeNode>,
    /// Aggregate counts.
    pub stats: TreeStats,
}

/// One folder's slot in the arena.
#[derive(Debug, Default)]
struct FolderSlot {
    name: String,
    path: String,
    folders: Vec<usize>,
    files: Vec<TreeNode>,
}

/// Fold a flat listing into a sorted tree with stats.
///
/// Keys ending with `/` are folder markers and contribute nothing. Every
/// level of the result has folders before files, each group in natural
/// name order.
pub fn build_tree(records: &[ObjectRecord]) -> BuiltTree {
    let mut slots: Vec<FolderSlot> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut root_folders: Vec<usize> = Vec::new();
    let mut root_files: Vec<TreeNode> = Vec::new();
    let mut stats = TreeStats::default();

    for record in records {
        if record.is_folder_marker() {
            continue;
        }

        stats.total_files += 1;
        let file_name = record.file_name();
        if FileKind::Pdf.matches(file_name) {
            stats.pdf_files += 1;
        } else if FileKind::Image.matches(file_name) {
            stats.image_files += 1;
        }

        let segments: Vec<&str> = record.key.split('/').collect();
        let mut parent: Option<usize> = None;
        let mut path = String::new();

        for (depth, segment) in segments.iter().enumerate() {
            if depth + 1 == segments.len() {
                let file = TreeNode::File {
                    name: (*segment).to_string(),
                    path: record.key.clone(),
                    size: record.size,
                };
                match parent {
                    Some(idx) => slots[idx].files.push(file),
                    None => root_files.push(file),
                }
            } else {
                if !path.is_empty() {
                    path.push('/');
                }
                path.push_str(segment);

                let idx = match index.get(&path) {
                    Some(&existing) => existing,
                    None => {
                        let idx = slots.len();
                        slots.push(FolderSlot {
                            name: (*segment).to_string(),
                            path: path.clone(),
                            folders: Vec::new(),
                            files: Vec::new(),
                        });
                        index.insert(path.clone(), idx);
                        match parent {
                            Some(p) => slots[p].folders.push(idx),
                            None => root_folders.push(idx),
                        }
                        stats.total_folders += 1;
                        idx
                    }
                };
                parent = Some(idx);
            }
        }
    }

    let mut tree = materialize(&mut slots, root_folders);
    tree.extend(root_files);
    sort_nodes(&mut tree);

    BuiltTree { tree, stats }
}

/// Turn folder slots into owned [`TreeNode`]s, consuming the arena edges.
fn materialize(slots: &mut [FolderSlot], indices: Vec<usize>) -> Vec<TreeNode> {
    let mut nodes = Vec::with_capacity(indices.len());
    for idx in indices {
        let child_folders = mem::take(&mut slots[idx].folders);
        let files = mem::take(&mut slots[idx].files);
        let name = mem::take(&mut slots[idx].name);
        let path = mem::take(&mut slots[idx].path);

        let mut children = materialize(slots, child_folders);
        children.extend(files);

        nodes.push(TreeNode::Folder {
            name,
            path,
            children,
        });
    }
    nodes
}

/// Recursively sort every level: folders first, then natural name order
/// within each group.
fn sort_nodes(nodes: &mut [TreeNode]) {
    nodes.sort_by(|a, b| match (a.is_folder(), b.is_folder()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => natural_cmp(a.name(), b.name()),
    });

    for node in nodes.iter_mut() {
        if let TreeNode::Folder { children, .. } = node {
            sort_nodes(children);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(keys: &[&str]) -> Vec<ObjectRecord> {
        keys.iter()
            .map(|key| ObjectRecord::new(*key, 100))
            .collect()
    }

    fn names(nodes: &[TreeNode]) -> Vec<&str> {
        nodes.iter().map(TreeNode::name).collect()
    }

    fn folder_children<'a>(nodes: &'a [TreeNode], name: &str) -> &'a [TreeNode] {
        match nodes
            .iter()
            .find(|n| n.name() == name)
            .expect("folder present")
        {
            TreeNode::Folder { children, .. } => children,
            TreeNode::File { .. } => panic!("{name} is a file"),
        }
    }

    #[test]
    fn test_leaf_count_matches_non_marker_keys() {
        let built = build_tree(&records(&[
            "1. QC check list/PO1/SN001.pdf",
            "1. QC check list/PO1/SN002.pdf",
            "1. QC check list/PO2/SN001.pdf",
            "2. Photo/1.EEV/",
            "2. Photo/1.EEV/PO1/a.jpg",
        ]));

        assert_eq!(built.stats.total_files, 4);

        fn count_files(nodes: &[TreeNode]) -> u64 {
            nodes
                .iter()
                .map(|n| match n {
                    TreeNode::File { .. } => 1,
                    TreeNode::Folder { children, .. } => count_files(children),
                })
                .sum()
        }
        assert_eq!(count_files(&built.tree), 4);
    }

    #[test]
    fn test_folders_counted_once() {
        let built = build_tree(&records(&[
            "1. QC check list/PO1/SN001.pdf",
            "1. QC check list/PO1/SN002.pdf",
            "1. QC check list/PO2/SN001.pdf",
        ]));

        // "1. QC check list", "PO1", "PO2"
        assert_eq!(built.stats.total_folders, 3);
        assert_eq!(names(&built.tree), ["1. QC check list"]);
        assert_eq!(
            names(folder_children(&built.tree, "1. QC check list")),
            ["PO1", "PO2"]
        );
    }

    #[test]
    fn test_folder_paths_are_cumulative() {
        let built = build_tree(&records(&["2. Photo/1.EEV/PO1/a.jpg"]));

        let photo = folder_children(&built.tree, "2. Photo");
        match &photo[0] {
            TreeNode::Folder { path, .. } => assert_eq!(path, "2. Photo/1.EEV"),
            TreeNode::File { .. } => panic!("expected folder"),
        }
        let po1 = folder_children(photo, "1.EEV");
        match &po1[0] {
            TreeNode::Folder { path, .. } => assert_eq!(path, "2. Photo/1.EEV/PO1"),
            TreeNode::File { .. } => panic!("expected folder"),
        }
    }

    #[test]
    fn test_folders_precede_files_and_natural_order() {
        let built = build_tree(&records(&[
            "docs/zeta.pdf",
            "docs/sub10/a.pdf",
            "docs/sub2/a.pdf",
            "docs/alpha.pdf",
            "docs/file10.pdf",
            "docs/file2.pdf",
        ]));

        let children = folder_children(&built.tree, "docs");
        assert_eq!(
            names(children),
            ["sub2", "sub10", "alpha.pdf", "file2.pdf", "file10.pdf", "zeta.pdf"]
        );
    }

    #[test]
    fn test_stats_classification_is_mutually_exclusive() {
        let built = build_tree(&records(&[
            "a/report.pdf",
            "a/photo.JPG",
            "a/photo2.webp",
            "a/data.csv",
        ]));

        assert_eq!(built.stats.total_files, 4);
        assert_eq!(built.stats.pdf_files, 1);
        assert_eq!(built.stats.image_files, 2);
    }

    #[test]
    fn test_trailing_slash_keys_are_excluded() {
        let built = build_tree(&records(&["a/", "a/b/", "a/b/c.pdf"]));

        assert_eq!(built.stats.total_files, 1);
        assert_eq!(built.stats.total_folders, 2);
    }

    #[test]
    fn test_root_level_files() {
        let built = build_tree(&records(&["readme.pdf", "folder/x.pdf"]));

        assert_eq!(names(&built.tree), ["folder", "readme.pdf"]);
        assert!(built.tree[0].is_folder());
        assert!(!built.tree[1].is_folder());
    }

    #[test]
    fn test_empty_listing_builds_empty_tree() {
        let built = build_tree(&[]);
        assert!(built.tree.is_empty());
        assert_eq!(built.stats, TreeStats::default());
    }

    #[test]
    fn test_file_size_preserved() {
        let built = build_tree(&[ObjectRecord::new("a/b.pdf", 12345)]);
        match &folder_children(&built.tree, "a")[0] {
            TreeNode::File { size, .. } => assert_eq!(*size, 12345),
            TreeNode::Folder { .. } => panic!("expected file"),
        }
    }
}
