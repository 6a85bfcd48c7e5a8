//! Shared building blocks for the SmogIt crates: logging setup and small
//! wire types that do not belong to any single layer.

pub mod types;
pub mod utils;
