//! # helpdeskd
//!
//! A small help-ticket service: an in-memory collection loaded once
//! from a JSON document and exposed over three HTTP operations, namely
//! list (filter + sort), create, and fetch-by-id.
//!
//! ## Architecture
//!
//! - [`store`] - the record type, seed-document loader, id generation,
//!   and the `RwLock`-guarded in-memory store
//! - [`query`] - filtering and the always-descending stable sort
//! - [`api`] - request validation, response envelopes, and the axum
//!   HTTP server
//! - [`config`] - bind address and document path
//! - [`cli`] - the `serve` and `check` commands
//! - [`observability`] - structured JSON logging

pub mod api;
pub mod cli;
pub mod config;
pub mod observability;
pub mod query;
pub mod store;
