use anyhow::Result;

use super::schema::CacheDb;

impl CacheDb {
    // ========================================================================
    // Blob Operations
    // ========================================================================

    /// Read a serialized blob by key.
    ///
    /// # Returns
    ///
    /// The blob if the key exists, or `None` if nothing has been persisted yet.
    pub async fn get_blob(&self, key: &str) -> Result<Option<String>> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM app_cache WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|(value,)| value))
    }

    /// Write a serialized blob (UPSERT), overwriting any prior value.
    ///
    /// Every persist overwrites the same key; whichever write lands last wins,
    /// which is the only ordering guarantee the store asks for.
    pub async fn set_blob(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO app_cache (key, value, updated_at)
            VALUES (?, ?, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
        "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
