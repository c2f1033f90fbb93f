//! In-memory ticket store
//!
//! One store per process, built from the seed document at startup and
//! handed to the HTTP layer behind an `Arc`. Reads and the single write
//! path both go through the interior `RwLock`; insert holds the write
//! lock across generate-check-insert so concurrent creates cannot race
//! on an id.

use std::collections::BTreeMap;
use std::sync::RwLock;

use super::errors::{DocumentError, StoreError, StoreResult};
use super::ids::generate_id;
use super::loader::SeedDocument;
use super::record::Ticket;

/// Attempts at a fresh id before an insert gives up.
pub const MAX_ID_ATTEMPTS: usize = 16;

/// Identifier-keyed ticket collection.
#[derive(Debug, Default)]
pub struct TicketStore {
    tickets: RwLock<BTreeMap<String, Ticket>>,
}

impl TicketStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the store from a loaded seed document.
    pub fn from_document(document: SeedDocument) -> Result<Self, DocumentError> {
        Ok(Self {
            tickets: RwLock::new(document.into_tickets()?),
        })
    }

    /// Exact-key lookup. Returns a cloned snapshot of the ticket.
    pub fn get(&self, id: &str) -> Option<Ticket> {
        self.tickets.read().ok()?.get(id).cloned()
    }

    /// Inserts a draft ticket under a freshly generated id and returns
    /// that id. The ticket is stamped with the id and its
    /// `request/<id>` resource path. Generation retries on collision up
    /// to [`MAX_ID_ATTEMPTS`]; nothing is stored on failure.
    pub fn insert(&self, ticket: Ticket) -> StoreResult<String> {
        self.insert_with(ticket, generate_id)
    }

    fn insert_with<F>(&self, mut ticket: Ticket, mut next_id: F) -> StoreResult<String>
    where
        F: FnMut() -> String,
    {
        let mut tickets = self.tickets.write().map_err(|_| StoreError::LockPoisoned)?;

        for _ in 0..MAX_ID_ATTEMPTS {
            let id = next_id();
            if tickets.contains_key(&id) {
                continue;
            }

            ticket.id = id.clone();
            ticket.resource = Some(format!("request/{}", id));
            tickets.insert(id.clone(), ticket);
            return Ok(id);
        }

        Err(StoreError::IdSpaceExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    /// Id-ordered snapshot of every ticket.
    pub fn all(&self) -> Vec<Ticket> {
        self.tickets
            .read()
            .map(|tickets| tickets.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of stored tickets.
    pub fn len(&self) -> usize {
        self.tickets.read().map(|tickets| tickets.len()).unwrap_or(0)
    }

    /// Returns true when the store holds no tickets.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ids::ID_LENGTH;
    use serde_json::json;

    fn seeded(ids: &[&str]) -> TicketStore {
        let mut helptickets = serde_json::Map::new();
        for (i, id) in ids.iter().enumerate() {
            helptickets.insert(
                id.to_string(),
                json!({"title": format!("t{}", i), "author": "a", "priority": 1, "time": i}),
            );
        }

        let document: SeedDocument =
            serde_json::from_value(json!({ "helptickets": helptickets })).unwrap();
        TicketStore::from_document(document).unwrap()
    }

    #[test]
    fn test_empty_store() {
        let store = TicketStore::new();

        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.all().is_empty());
        assert_eq!(store.get("aaaaaa"), None);
    }

    #[test]
    fn test_from_document() {
        let store = seeded(&["aaaaaa", "bbbbbb"]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("aaaaaa").unwrap().id, "aaaaaa");
    }

    #[test]
    fn test_get_miss() {
        let store = seeded(&["aaaaaa"]);

        assert_eq!(store.get("zzzzzz"), None);
    }

    #[test]
    fn test_insert_assigns_id_and_resource() {
        let store = TicketStore::new();
        let draft = Ticket::draft("Broken printer", "It jams", "dana", 100);

        let id = store.insert(draft).unwrap();

        assert_eq!(id.len(), ID_LENGTH);
        let stored = store.get(&id).unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.resource.as_deref(), Some(format!("request/{}", id).as_str()));
        assert_eq!(stored.title, "Broken printer");
        assert_eq!(stored.author, "dana");
    }

    #[test]
    fn test_insert_retries_on_collision() {
        let store = seeded(&["aaaaaa"]);
        let mut attempts = vec!["bbbbbb".to_string(), "aaaaaa".to_string()];

        let id = store
            .insert_with(Ticket::draft("t", "r", "a", 0), move || {
                attempts.pop().unwrap()
            })
            .unwrap();

        assert_eq!(id, "bbbbbb");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_insert_gives_up_after_max_attempts() {
        let store = seeded(&["aaaaaa"]);
        let mut calls = 0;

        let err = store
            .insert_with(Ticket::draft("t", "r", "a", 0), || {
                calls += 1;
                "aaaaaa".to_string()
            })
            .unwrap_err();

        assert!(matches!(
            err,
            StoreError::IdSpaceExhausted {
                attempts: MAX_ID_ATTEMPTS
            }
        ));
        assert_eq!(calls, MAX_ID_ATTEMPTS);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_all_is_id_ordered() {
        let store = seeded(&["cccccc", "aaaaaa", "bbbbbb"]);

        let ids: Vec<String> = store.all().into_iter().map(|t| t.id).collect();

        assert_eq!(ids, vec!["aaaaaa", "bbbbbb", "cccccc"]);
    }

    #[test]
    fn test_get_returns_snapshot() {
        let store = seeded(&["aaaaaa"]);

        let mut copy = store.get("aaaaaa").unwrap();
        copy.title = "mutated".to_string();

        assert_eq!(store.get("aaaaaa").unwrap().title, "t0");
    }
}
