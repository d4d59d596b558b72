//! Folder-tree reconstruction from a flat key listing.

pub mod builder;
pub mod order;

pub use builder::{BuiltTree, build_tree};
pub use order::natural_cmp;
