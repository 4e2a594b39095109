//! Metadata store trait and SQLite implementation.

use crate::error::{MetadataError, MetadataResult};
use crate::models::StringRow;
use crate::repos::StringRepo;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Combined metadata store trait.
#[async_trait]
pub trait MetadataStore: StringRepo + Send + Sync {
    /// Run database migrations.
    async fn migrate(&self) -> MetadataResult<()>;

    /// Check database connectivity and health.
    async fn health_check(&self) -> MetadataResult<()>;
}

/// SQLite-based metadata store.
pub struct SqliteStore {
    pool: Pool<Sqlite>,
}

impl SqliteStore {
    /// Create a new SQLite store and run migrations.
    pub async fn new(path: impl AsRef<Path>) -> MetadataResult<Self> {
        let path = path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}?mode=rwc", path.display()))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
            .foreign_keys(true)
            // Prevent transient "database is locked" errors under concurrent access.
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            // SQLite permits limited write concurrency; a single connection avoids
            // persistent "database is locked" failures under axum concurrency.
            .max_connections(1)
            .connect_with(opts)
            .await?;

        let store = Self { pool };
        store.migrate().await?;

        Ok(store)
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }
}

#[async_trait]
impl MetadataStore for SqliteStore {
    async fn migrate(&self) -> MetadataResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS strings (
                id TEXT PRIMARY KEY,
                value TEXT NOT NULL UNIQUE,
                properties TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // Scan order must be deterministic across requests.
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_strings_created_at ON strings(created_at, id)",
        )
        .execute(&self.pool)
        .await?;

        tracing::debug!("metadata migrations applied");
        Ok(())
    }

    async fn health_check(&self) -> MetadataResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl StringRepo for SqliteStore {
    async fn insert_string(&self, row: &StringRow) -> MetadataResult<()> {
        match sqlx::query(
            r#"
            INSERT INTO strings (id, value, properties, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&row.id)
        .bind(&row.value)
        .bind(&row.properties)
        .bind(row.created_at)
        .execute(&self.pool)
        .await
        {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) => {
                let msg = db_err.message();
                // SQLite error: "UNIQUE constraint failed: strings.id" (or .value)
                if msg.contains("UNIQUE constraint") || msg.contains("PRIMARY KEY constraint") {
                    Err(MetadataError::AlreadyExists(format!(
                        "string with id {}",
                        row.id
                    )))
                } else {
                    Err(sqlx::Error::Database(db_err).into())
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn get_string_by_value(&self, value: &str) -> MetadataResult<Option<StringRow>> {
        let row = sqlx::query_as::<_, StringRow>("SELECT * FROM strings WHERE value = ?")
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete_string_by_value(&self, value: &str) -> MetadataResult<bool> {
        let result = sqlx::query("DELETE FROM strings WHERE value = ?")
            .bind(value)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_strings(&self) -> MetadataResult<Vec<StringRow>> {
        let rows = sqlx::query_as::<_, StringRow>(
            "SELECT * FROM strings ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn count_strings(&self) -> MetadataResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM strings")
            .fetch_one(&self.pool)
            .await?;
        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corpus_core::StringRecord;
    use tempfile::tempdir;

    async fn test_store() -> (tempfile::TempDir, SqliteStore) {
        let temp = tempdir().unwrap();
        let store = SqliteStore::new(temp.path().join("corpus.db")).await.unwrap();
        (temp, store)
    }

    fn row_for(value: &str) -> StringRow {
        StringRow::from_record(&StringRecord::new(value.to_string())).unwrap()
    }

    #[tokio::test]
    async fn insert_and_get_by_value() {
        let (_temp, store) = test_store().await;
        store.insert_string(&row_for("Racecar")).await.unwrap();

        let row = store
            .get_string_by_value("Racecar")
            .await
            .unwrap()
            .expect("row should exist");
        assert_eq!(row.value, "Racecar");

        let record = row.into_record().unwrap();
        assert!(record.properties.is_palindrome);
    }

    #[tokio::test]
    async fn duplicate_insert_is_already_exists() {
        let (_temp, store) = test_store().await;
        store.insert_string(&row_for("abc")).await.unwrap();

        let err = store.insert_string(&row_for("abc")).await.unwrap_err();
        assert!(matches!(err, MetadataError::AlreadyExists(_)));
        assert_eq!(store.count_strings().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn delete_reports_absence() {
        let (_temp, store) = test_store().await;
        store.insert_string(&row_for("abc")).await.unwrap();

        assert!(store.delete_string_by_value("abc").await.unwrap());
        assert!(!store.delete_string_by_value("abc").await.unwrap());
        assert!(store.get_string_by_value("abc").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_is_ordered_and_stable() {
        let (_temp, store) = test_store().await;
        for value in ["one", "two", "three"] {
            store.insert_string(&row_for(value)).await.unwrap();
        }

        let first: Vec<String> = store
            .list_strings()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.value)
            .collect();
        let second: Vec<String> = store
            .list_strings()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.value)
            .collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[tokio::test]
    async fn health_check_passes() {
        let (_temp, store) = test_store().await;
        store.health_check().await.unwrap();
    }
}
