//! Database models mapping to the metadata schema.

use crate::error::{MetadataError, MetadataResult};
use corpus_core::{ContentHash, StringRecord};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Analyzed string record row.
///
/// `properties` holds the derived property document as opaque JSON text; the
/// store never inspects it, filtering happens in the core after a scan.
#[derive(Debug, Clone, FromRow)]
pub struct StringRow {
    /// SHA-256 hex digest of `value`; primary key.
    pub id: String,
    /// Original string, unique across all rows.
    pub value: String,
    /// Derived properties as a JSON document.
    pub properties: String,
    pub created_at: OffsetDateTime,
}

impl StringRow {
    /// Build a row from a domain record.
    pub fn from_record(record: &StringRecord) -> MetadataResult<Self> {
        let properties = serde_json::to_string(&record.properties)
            .map_err(|e| MetadataError::Internal(format!("encode properties: {e}")))?;
        Ok(Self {
            id: record.id.to_hex(),
            value: record.value.clone(),
            properties,
            created_at: record.created_at,
        })
    }

    /// Decode the row back into a domain record.
    pub fn into_record(self) -> MetadataResult<StringRecord> {
        let id = ContentHash::from_hex(&self.id)
            .map_err(|e| MetadataError::Internal(format!("corrupt record id {}: {e}", self.id)))?;
        let properties = serde_json::from_str(&self.properties).map_err(|e| {
            MetadataError::Internal(format!("corrupt properties for {}: {e}", self.id))
        })?;
        Ok(StringRecord {
            id,
            value: self.value,
            properties,
            created_at: self.created_at,
        })
    }
}
