//! # qcdocs-storage
//!
//! Object store implementations for QC Docs: an S3-compatible provider for
//! production and an in-memory provider for tests and local development.

pub mod factory;
pub mod providers;

pub use factory::build_store;
pub use providers::memory::MemoryObjectStore;
pub use providers::s3::S3ObjectStore;
