//! Wildcard search over the bucket's document categories.

pub mod matcher;
pub mod service;

pub use matcher::{MatchMode, wildcard_match};
pub use service::SearchService;
