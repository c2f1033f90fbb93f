//! # Ticket Store
//!
//! The in-memory record store and everything that feeds it: the ticket
//! record type, the seed-document loader, and the id generator.

pub mod errors;
pub mod ids;
pub mod loader;
pub mod memory;
pub mod record;

pub use errors::{DocumentError, StoreError, StoreResult};
pub use ids::{generate_id, ID_LENGTH};
pub use loader::SeedDocument;
pub use memory::{TicketStore, MAX_ID_ATTEMPTS};
pub use record::{Ticket, DEFAULT_PRIORITY};
