//! # qcdocs-api
//!
//! HTTP API layer for QC Docs built on Axum.
//!
//! Provides the search, tree, and file endpoints, permissive CORS, request
//! logging, DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
