//! # Response Envelopes
//!
//! JSON envelopes for the two success shapes: a counted list and a
//! single record.

use serde::Serialize;

/// List response
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub data: Vec<T>,
    pub count: usize,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        let count = data.len();
        Self { data, count }
    }
}

/// Single record response
#[derive(Debug, Clone, Serialize)]
pub struct SingleResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> SingleResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
