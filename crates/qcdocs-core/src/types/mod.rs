//! Core type definitions used across the QC Docs workspace.

pub mod category;
pub mod object;
pub mod tree;
