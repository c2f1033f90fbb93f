//! Store and seed-document error types

use thiserror::Error;

/// Result type for store mutations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from mutating the ticket store.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Identifier generation kept colliding with existing keys.
    #[error("no free ticket id after {attempts} attempts")]
    IdSpaceExhausted { attempts: usize },

    /// A writer panicked while holding the lock.
    #[error("ticket store lock poisoned")]
    LockPoisoned,
}

/// Errors from loading the seed document. All of these are fatal at
/// startup: the process refuses to serve from a document it cannot
/// parse completely.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read ticket document {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid ticket document {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The same id appears in both legacy collections.
    #[error("duplicate ticket id '{0}' across document collections")]
    DuplicateId(String),
}
