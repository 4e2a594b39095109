//! String record repository trait.

use crate::error::MetadataResult;
use crate::models::StringRow;
use async_trait::async_trait;

/// Repository for analyzed string records.
#[async_trait]
pub trait StringRepo: Send + Sync {
    /// Insert a new record.
    ///
    /// Uniqueness of both `id` and `value` is enforced atomically by the
    /// single conditional insert; a duplicate fails with `AlreadyExists`
    /// rather than racing a separate existence check.
    async fn insert_string(&self, row: &StringRow) -> MetadataResult<()>;

    /// Look up a record by its exact value.
    async fn get_string_by_value(&self, value: &str) -> MetadataResult<Option<StringRow>>;

    /// Delete a record by its exact value. Returns false when absent.
    async fn delete_string_by_value(&self, value: &str) -> MetadataResult<bool>;

    /// Scan all records in deterministic (created_at, id) order.
    async fn list_strings(&self) -> MetadataResult<Vec<StringRow>>;

    /// Total number of stored records.
    async fn count_strings(&self) -> MetadataResult<u64>;
}
