//! Trait definitions implemented by other QC Docs crates.

pub mod store;
