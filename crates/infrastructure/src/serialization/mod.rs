//! Deterministic JSON serialization for the globals file.
//!
//! Keeps the file stable between saves:
//! - Object keys sorted (via `BTreeMap` in domain types)
//! - 2-space indentation
//! - Trailing newline

mod json;

pub use json::*;
