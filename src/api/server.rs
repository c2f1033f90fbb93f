//! # HTTP Server
//!
//! Axum router and handlers for the ticket endpoints, plus the server
//! wrapper the CLI boots.
//!
//! Routes:
//! - `GET  /`                   redirect to the listing
//! - `GET  /reviews`            list tickets (filter + sort)
//! - `POST /reviews`            create a ticket
//! - `GET  /reviews/{ticket_id}` fetch one ticket

use std::collections::HashMap;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, Method, StatusCode};
use axum::response::Redirect;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::Value;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ServerConfig;
use crate::observability::Logger;
use crate::query::{filter_and_sort, SortField};
use crate::store::{StoreError, Ticket, TicketStore};

use super::errors::{ApiError, ApiResult};
use super::request::{CreateTicket, ListQuery};
use super::response::{ListResponse, SingleResponse};

// ============================================================
// Router
// ============================================================

/// Shared handler state.
#[derive(Clone)]
struct AppState {
    store: Arc<TicketStore>,
}

/// Builds the application router over a loaded store.
pub fn router(store: Arc<TicketStore>) -> Router {
    let state = AppState { store };

    Router::new()
        .route("/", get(index_handler))
        .route("/reviews", get(list_handler).post(create_handler))
        .route("/reviews/{ticket_id}", get(get_handler))
        .layer(cors_layer())
        .with_state(state)
}

/// Permissive cross-origin policy: any origin, the browser-facing
/// headers, and the standard method set.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_methods([Method::GET, Method::PUT, Method::POST, Method::DELETE])
}

// ============================================================
// Handlers
// ============================================================

/// Root redirect to the listing
async fn index_handler() -> Redirect {
    Redirect::to("/reviews")
}

/// List tickets, filtered and sorted per query parameters
async fn list_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<ListResponse<Ticket>>> {
    let query = ListQuery::parse(&params)?;
    let tickets = filter_and_sort(state.store.all(), &query.query, query.sort_by);

    Ok(Json(ListResponse::new(tickets)))
}

/// Create a ticket, then render the full default-ordered listing
async fn create_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<ListResponse<Ticket>>)> {
    let request = CreateTicket::from_value(&body)?;
    let draft = Ticket::draft(
        request.name,
        request.review,
        request.author,
        Utc::now().timestamp(),
    );

    let id = state.store.insert(draft).map_err(|err| {
        if let StoreError::IdSpaceExhausted { attempts } = &err {
            let attempts = attempts.to_string();
            Logger::error("ID_SPACE_EXHAUSTED", &[("attempts", attempts.as_str())]);
        }
        ApiError::from(err)
    })?;
    Logger::info("TICKET_CREATED", &[("id", id.as_str())]);

    let tickets = filter_and_sort(state.store.all(), "", SortField::default());

    Ok((StatusCode::CREATED, Json(ListResponse::new(tickets))))
}

/// Fetch one ticket by id
async fn get_handler(
    State(state): State<AppState>,
    Path(ticket_id): Path<String>,
) -> ApiResult<Json<SingleResponse<Ticket>>> {
    let ticket = state
        .store
        .get(&ticket_id)
        .ok_or(ApiError::NotFound(ticket_id))?;

    Ok(Json(SingleResponse::new(ticket)))
}

// ============================================================
// Server
// ============================================================

/// HTTP server bound to a configuration and a loaded store.
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Creates the server from configuration and a loaded store.
    pub fn new(config: ServerConfig, store: Arc<TicketStore>) -> Self {
        Self {
            router: router(store),
            config,
        }
    }

    /// The underlying router, for driving requests without a socket.
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Binds the configured address and serves until the process stops.
    pub async fn start(self) -> Result<(), io::Error> {
        let bind_addr = self.config.bind_addr();
        let addr: SocketAddr = bind_addr.parse().map_err(|err| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid bind address {}: {}", bind_addr, err),
            )
        })?;

        Logger::info("SERVER_START", &[("addr", bind_addr.as_str())]);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await
    }
}
