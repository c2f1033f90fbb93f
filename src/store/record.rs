//! Help ticket record type
//!
//! A ticket is the unit the whole service traffics in, seeded from the
//! data document at startup or created through the API. Seed documents
//! may carry fields beyond the ones modelled here; those round-trip
//! through the flattened `extra` map untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Priority assigned to tickets created through the API.
pub const DEFAULT_PRIORITY: i64 = 0;

/// A single help ticket.
///
/// `id` is assigned exactly once: from the document key at load, or by
/// the store on insert. A draft (not yet inserted) carries an empty
/// `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Store key; immutable once assigned.
    #[serde(default)]
    pub id: String,

    /// Collection-relative resource path (`request/<id>`), assigned to
    /// tickets created through the API.
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,

    pub title: String,

    pub author: String,

    /// Sortable priority value.
    pub priority: i64,

    /// Sortable timestamp value (unix seconds for created tickets).
    pub time: i64,

    /// Free-text body captured from the create operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,

    /// Whatever else the seed document carried for this record.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Ticket {
    /// Builds a draft ticket for the create operation. The store
    /// assigns `id` and `resource` on insert.
    pub fn draft(
        title: impl Into<String>,
        review: impl Into<String>,
        author: impl Into<String>,
        time: i64,
    ) -> Self {
        Self {
            id: String::new(),
            resource: None,
            title: title.into(),
            author: author.into(),
            priority: DEFAULT_PRIORITY,
            time,
            review: Some(review.into()),
            extra: Map::new(),
        }
    }

    /// Text the listing filter matches against: `title` then `author`,
    /// lowercased, concatenated without a separator. A query may span
    /// the junction between the two fields.
    pub fn search_text(&self) -> String {
        format!("{}{}", self.title, self.author).to_lowercase()
    }
}
