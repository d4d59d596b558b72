//! HTTP request handlers.

pub mod file;
pub mod health;
pub mod search;
pub mod tree;
