use anyhow::Result;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use std::str::FromStr;
use std::time::Duration;

use super::types::StorageError;

// ============================================================================
// Cache Database
// ============================================================================

/// Local key-value cache backing the store's single persisted blob.
///
/// One table, one row that matters. SQLite gives us what the app needs for
/// free: same-key writes are serialized, so racing persist attempts degrade
/// to last-write-wins rather than corruption.
#[derive(Clone)]
pub struct CacheDb {
    pub(crate) pool: SqlitePool,
}

impl CacheDb {
    /// Open the cache database and run migrations.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InstanceLocked` if another instance has the
    /// database locked (SQLITE_BUSY, SQLITE_LOCKED, SQLITE_CANTOPEN).
    /// Returns `StorageError::Other` for other database errors.
    pub async fn open(path: &str) -> Result<Self, StorageError> {
        let url = format!("sqlite:{}?mode=rwc", path);

        // busy_timeout=5000: SQLite waits up to 5 seconds for locks to release
        // before returning SQLITE_BUSY. Using pragma() ensures all connections
        // in the pool inherit the setting.
        let options = SqliteConnectOptions::from_str(&url)
            .map_err(StorageError::from_sqlx)?
            .pragma("busy_timeout", "5000");
        // Single-writer workload: one hydrate read plus fire-and-forget
        // overwrites of one key. Two connections cover read-while-write.
        let pool = SqlitePoolOptions::new()
            .max_connections(2)
            .acquire_timeout(Duration::from_secs(10))
            .connect_with(options)
            .await
            .map_err(StorageError::from_sqlx)?;
        let db = Self { pool };
        db.migrate().await.map_err(|e| {
            let error_string = e.to_string().to_lowercase();
            if error_string.contains("database is locked")
                || error_string.contains("database table is locked")
                || error_string.contains("sqlite_busy")
                || error_string.contains("sqlite_locked")
            {
                StorageError::InstanceLocked
            } else {
                StorageError::Migration(e.to_string())
            }
        })?;
        Ok(db)
    }

    /// Run migrations. `IF NOT EXISTS` keeps this idempotent, so re-running
    /// on an existing cache is a no-op.
    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS app_cache (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            )
        "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
