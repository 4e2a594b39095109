//! Analyzed string records.

use crate::analysis::{self, StringProperties};
use crate::hash::ContentHash;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A stored string together with its derived properties.
///
/// Immutable once created: the id is the SHA-256 content hash of the value,
/// so `id == hash(value)` holds for every record, and no two records share a
/// value or an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringRecord {
    /// Content hash of the value; primary key.
    pub id: ContentHash,
    /// Original string, unique across all records.
    pub value: String,
    /// Properties derived at creation time.
    pub properties: StringProperties,
    /// Insertion timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl StringRecord {
    /// Analyze a value and build the record for it, stamped with the current
    /// time.
    pub fn new(value: String) -> Self {
        let properties = analysis::analyze(&value);
        Self {
            id: properties.hash,
            value,
            properties,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}
