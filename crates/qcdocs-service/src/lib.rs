//! # qcdocs-service
//!
//! Domain services for the QC Docs vault: exhaustive key listing, wildcard
//! matching, category search, and folder-tree reconstruction.

pub mod lister;
pub mod search;
pub mod tree;

pub use search::SearchService;
pub use tree::{BuiltTree, build_tree};
