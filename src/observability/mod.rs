//! Observability for the ticket service
//!
//! Structured one-line JSON logging for process-level events. Nothing
//! here carries semantic authority over request handling.

pub mod logger;

pub use logger::{Logger, Severity};
