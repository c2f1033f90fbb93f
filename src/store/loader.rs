//! Seed document loading
//!
//! The service boots from a single JSON document. Legacy documents
//! carry two separate collections, `reviews` and `helptickets`; both
//! feed the one unified store. An id present in both collections is
//! rejected rather than merged by guesswork.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::errors::DocumentError;
use super::record::Ticket;

/// The on-disk document shape. Either collection may be absent.
#[derive(Debug, Default, Deserialize)]
pub struct SeedDocument {
    #[serde(default)]
    pub helptickets: BTreeMap<String, Ticket>,

    #[serde(default)]
    pub reviews: BTreeMap<String, Ticket>,
}

impl SeedDocument {
    /// Reads and parses a document from disk.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let content = fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| DocumentError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Record counts per legacy collection, for startup logging.
    pub fn collection_counts(&self) -> (usize, usize) {
        (self.helptickets.len(), self.reviews.len())
    }

    /// Merges the legacy collections into one id-keyed map. The map key
    /// is the authoritative id and is stamped onto each record; a key
    /// present in both collections fails the merge.
    pub fn into_tickets(self) -> Result<BTreeMap<String, Ticket>, DocumentError> {
        let mut tickets = BTreeMap::new();

        for (id, mut ticket) in self.helptickets.into_iter().chain(self.reviews) {
            ticket.id = id.clone();
            if tickets.insert(id.clone(), ticket).is_some() {
                return Err(DocumentError::DuplicateId(id));
            }
        }

        Ok(tickets)
    }
}
