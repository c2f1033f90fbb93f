//! # HTTP API
//!
//! Request validation, response envelopes, error mapping, and the axum
//! server for the ticket endpoints.

pub mod errors;
pub mod request;
pub mod response;
pub mod server;

pub use errors::{ApiError, ApiResult, ErrorBody};
pub use request::{CreateTicket, ListQuery};
pub use response::{ListResponse, SingleResponse};
pub use server::{router, HttpServer};
