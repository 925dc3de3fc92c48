//! Fire-and-forget persistence: mutation committed → cache write attempted.
//!
//! Mutations push a full snapshot onto an unbounded channel and return
//! immediately; a writer task owns the receiving end and performs the actual
//! cache writes. Write failures are logged, never propagated, and never roll
//! back in-memory state. Rapid sequential mutations each enqueue their own
//! overwrite of the same key, so the last write to land wins.
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::model::{
    EventItem, FeedItem, IssueTicket, MemberProfile, PaymentRecord, VolunteerTask,
};
use crate::storage::CacheDb;

/// Fixed cache key for the single persisted blob.
pub const CACHE_KEY: &str = "tein-app-cache";

// ============================================================================
// Cache Snapshot
// ============================================================================

/// The exact set of fields persisted to the local cache.
///
/// Media, opportunities, leaderboard and analytics are excluded: they are
/// either static reference data or derived on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheSnapshot {
    pub profile: MemberProfile,
    pub feed: Vec<FeedItem>,
    pub events: Vec<EventItem>,
    pub issues: Vec<IssueTicket>,
    pub tasks: Vec<VolunteerTask>,
    pub payments: Vec<PaymentRecord>,
    pub learning_progress: u8,
}

// ============================================================================
// Persist Queue
// ============================================================================

/// Sending side of the persist queue, held by the store.
#[derive(Clone)]
pub struct PersistHandle {
    tx: mpsc::UnboundedSender<CacheSnapshot>,
}

impl PersistHandle {
    /// Queue a snapshot for writing. Never blocks; a closed channel (worker
    /// gone) is logged and the snapshot dropped — in-memory state stays
    /// authoritative either way.
    pub(crate) fn enqueue(&self, snapshot: CacheSnapshot) {
        if self.tx.send(snapshot).is_err() {
            tracing::warn!("Persist worker is gone, dropping cache write");
        }
    }
}

/// Receiving side of the persist queue: writes snapshots to the cache.
pub struct PersistWorker {
    rx: mpsc::UnboundedReceiver<CacheSnapshot>,
    cache: CacheDb,
}

/// Create a persist queue over the given cache database.
pub fn persist_queue(cache: CacheDb) -> (PersistHandle, PersistWorker) {
    let (tx, rx) = mpsc::unbounded_channel();
    (PersistHandle { tx }, PersistWorker { rx, cache })
}

impl PersistWorker {
    /// Long-running writer loop. Runs until every `PersistHandle` is dropped.
    pub async fn run(mut self) {
        while let Some(snapshot) = self.rx.recv().await {
            Self::write(&self.cache, &snapshot).await;
        }
        tracing::debug!("Persist queue closed, writer exiting");
    }

    /// Write everything currently queued, then return.
    ///
    /// Test hook: lets callers assert on in-memory state immediately after a
    /// mutation and on persisted state after an explicit flush.
    pub async fn drain(&mut self) {
        while let Ok(snapshot) = self.rx.try_recv() {
            Self::write(&self.cache, &snapshot).await;
        }
    }

    async fn write(cache: &CacheDb, snapshot: &CacheSnapshot) {
        let blob = match serde_json::to_string(snapshot) {
            Ok(blob) => blob,
            Err(e) => {
                tracing::warn!(error = %e, "Cache save failed: snapshot did not serialize");
                return;
            }
        };
        if let Err(e) = cache.set_blob(CACHE_KEY, &blob).await {
            tracing::warn!(error = %e, "Cache save failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_snapshot() -> CacheSnapshot {
        CacheSnapshot {
            profile: crate::seed::profile(),
            feed: crate::seed::feed(),
            events: crate::seed::events(),
            issues: crate::seed::issues(),
            tasks: crate::seed::tasks(),
            payments: crate::seed::payments(),
            learning_progress: crate::seed::LEARNING_PROGRESS,
        }
    }

    #[tokio::test]
    async fn test_drain_writes_queued_snapshot() {
        let cache = CacheDb::open(":memory:").await.unwrap();
        let (handle, mut worker) = persist_queue(cache.clone());

        handle.enqueue(test_snapshot());
        worker.drain().await;

        let blob = cache.get_blob(CACHE_KEY).await.unwrap().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&blob).unwrap();
        assert_eq!(parsed["profile"]["membershipId"], "TEIN-UCC-2025-045");
        assert_eq!(parsed["learningProgress"], 72);
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let cache = CacheDb::open(":memory:").await.unwrap();
        let (handle, mut worker) = persist_queue(cache.clone());

        let mut first = test_snapshot();
        first.learning_progress = 10;
        let mut second = test_snapshot();
        second.learning_progress = 90;

        handle.enqueue(first);
        handle.enqueue(second);
        worker.drain().await;

        let blob = cache.get_blob(CACHE_KEY).await.unwrap().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&blob).unwrap();
        assert_eq!(parsed["learningProgress"], 90);
    }

    #[tokio::test]
    async fn test_drain_on_empty_queue_is_noop() {
        let cache = CacheDb::open(":memory:").await.unwrap();
        let (_handle, mut worker) = persist_queue(cache.clone());

        worker.drain().await;

        assert_eq!(cache.get_blob(CACHE_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_enqueue_after_worker_dropped_does_not_panic() {
        let cache = CacheDb::open(":memory:").await.unwrap();
        let (handle, worker) = persist_queue(cache);
        drop(worker);

        // Logged and dropped, not surfaced
        handle.enqueue(test_snapshot());
    }

    #[tokio::test]
    async fn test_writer_loop_exits_when_all_handles_dropped() {
        let cache = CacheDb::open(":memory:").await.unwrap();
        let (handle, worker) = persist_queue(cache.clone());
        let writer = tokio::spawn(worker.run());

        handle.enqueue(test_snapshot());
        drop(handle);

        // Closing the last sender must end the recv loop, not leave it pending
        tokio::time::timeout(std::time::Duration::from_secs(1), writer)
            .await
            .expect("writer task did not exit after queue closed")
            .unwrap();
        assert!(cache.get_blob(CACHE_KEY).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_snapshot_excludes_static_and_derived_fields() {
        let blob = serde_json::to_value(test_snapshot()).unwrap();
        let keys: Vec<&String> = blob.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 7);
        assert!(blob.get("media").is_none());
        assert!(blob.get("opportunities").is_none());
        assert!(blob.get("leaderboard").is_none());
        assert!(blob.get("analytics").is_none());
        assert!(blob.get("todayQrSeed").is_none());
    }
}
