use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Storage-layer errors with user-friendly messages.
///
/// These never escape the store's operations: hydration and persistence
/// absorb them at the boundary and log. They are surfaced only by the binary
/// when opening the cache database at startup.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Another instance of the app has the cache database locked.
    #[error("Another instance of tein-chapter appears to be running. Please close it and try again.")]
    InstanceLocked,

    /// Migration failed
    #[error("Cache migration failed: {0}")]
    Migration(String),

    /// Generic database error
    #[error("Cache database error: {0}")]
    Other(#[from] sqlx::Error),
}

impl StorageError {
    /// Check if a sqlx error indicates database locking.
    pub(crate) fn from_sqlx(err: sqlx::Error) -> Self {
        let error_string = err.to_string().to_lowercase();

        // SQLITE_BUSY (5), SQLITE_LOCKED (6), SQLITE_CANTOPEN (14)
        if error_string.contains("database is locked")
            || error_string.contains("database table is locked")
            || error_string.contains("sqlite_busy")
            || error_string.contains("sqlite_locked")
            || error_string.contains("unable to open database file")
        {
            return StorageError::InstanceLocked;
        }

        StorageError::Other(err)
    }
}
