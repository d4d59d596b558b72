//! # qcdocs-core
//!
//! Core crate for the QC Docs vault server. Contains the object-store
//! trait, configuration schemas, domain types (search, categories, tree),
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other QC Docs crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
