//! # Query Engine
//!
//! Listing semantics over store snapshots: substring filtering and the
//! always-descending stable sort.

pub mod engine;

pub use engine::{filter_and_sort, SortField};
