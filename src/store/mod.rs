//! Central application state store.
//!
//! `AppStore` is the single source of truth every screen consumes: it owns all
//! domain collections, exposes a small set of mutation operations, computes
//! derived analytics on read, and runs a two-phase cache lifecycle (hydrate
//! once at startup, persist after every mutation).
//!
//! It is an explicit constructed object, not a global — tests build as many
//! independent stores as they like. Mutations are synchronous against
//! in-memory state; the only async boundaries are the one-time cache read and
//! the fire-and-forget persist queue.
mod persist;

pub use persist::{persist_queue, CacheSnapshot, PersistHandle, PersistWorker, CACHE_KEY};

use chrono::Local;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::analytics::Analytics;
use crate::model::{
    DuesStatus, EventItem, FeedItem, IssueDraft, IssueStatus, IssueTicket, LeaderboardEntry,
    MediaItem, MemberProfile, OpportunityItem, PaymentRecord, PaymentStatus, RsvpStatus,
    VolunteerTask,
};
use crate::seed;
use crate::storage::CacheDb;

/// Points awarded to the profile for every submitted issue.
pub const POINTS_PER_ISSUE: u32 = 10;

/// Volunteer hours added on every task toggle, in either direction.
pub const HOURS_PER_TOGGLE: u32 = 2;

// ============================================================================
// Store
// ============================================================================

/// The application state container. See module docs.
pub struct AppStore {
    profile: MemberProfile,
    feed: Vec<FeedItem>,
    events: Vec<EventItem>,
    issues: Vec<IssueTicket>,
    tasks: Vec<VolunteerTask>,
    media: Vec<MediaItem>,
    opportunities: Vec<OpportunityItem>,
    payments: Vec<PaymentRecord>,
    leaderboard: Vec<LeaderboardEntry>,
    learning_progress: u8,

    /// Session flag consumed by the root router; not entity data, never
    /// persisted.
    authenticated: bool,

    /// Guards the at-most-once hydration.
    hydrated: bool,

    /// Per-store counter mixed into issue ids; the millisecond timestamp
    /// alone collides when two submissions land in the same tick.
    issue_seq: u64,

    persist: Option<PersistHandle>,
}

impl AppStore {
    /// Create a store seeded with the built-in demo data and no persistence.
    ///
    /// Used directly in tests; the binary attaches a persist queue via
    /// [`AppStore::with_persist`].
    pub fn new() -> Self {
        Self {
            profile: seed::profile(),
            feed: seed::feed(),
            events: seed::events(),
            issues: seed::issues(),
            tasks: seed::tasks(),
            media: seed::media(),
            opportunities: seed::opportunities(),
            payments: seed::payments(),
            leaderboard: seed::leaderboard(),
            learning_progress: seed::LEARNING_PROGRESS,
            authenticated: false,
            hydrated: false,
            issue_seq: 0,
            persist: None,
        }
    }

    /// Create a seeded store whose mutations queue cache writes on `handle`.
    pub fn with_persist(handle: PersistHandle) -> Self {
        let mut store = Self::new();
        store.persist = Some(handle);
        store
    }

    // ========================================================================
    // Read Access
    // ========================================================================

    pub fn profile(&self) -> &MemberProfile {
        &self.profile
    }

    pub fn feed(&self) -> &[FeedItem] {
        &self.feed
    }

    pub fn events(&self) -> &[EventItem] {
        &self.events
    }

    pub fn issues(&self) -> &[IssueTicket] {
        &self.issues
    }

    pub fn tasks(&self) -> &[VolunteerTask] {
        &self.tasks
    }

    pub fn media(&self) -> &[MediaItem] {
        &self.media
    }

    pub fn opportunities(&self) -> &[OpportunityItem] {
        &self.opportunities
    }

    pub fn payments(&self) -> &[PaymentRecord] {
        &self.payments
    }

    pub fn leaderboard(&self) -> &[LeaderboardEntry] {
        &self.leaderboard
    }

    pub fn learning_progress(&self) -> u8 {
        self.learning_progress
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    // ========================================================================
    // Derived Getters
    // ========================================================================

    /// Deterministic display-only badge seed: membership id, device-local ISO
    /// date, current points. Not a security token, not rotated beyond the
    /// date component.
    pub fn today_qr_seed(&self) -> String {
        let today = Local::now().format("%Y-%m-%d");
        format!("{}-{}-{}", self.profile.membership_id, today, self.profile.points)
    }

    /// Impact analytics, recomputed from the current task list.
    pub fn analytics(&self) -> Analytics {
        Analytics::compute(&self.tasks)
    }

    // ========================================================================
    // Mutation Operations
    // ========================================================================
    //
    // None of these validate caller input strictly: an unknown id degrades to
    // a logged no-op, never an error. The store never panics or returns
    // failure from a mutation.

    /// Set the RSVP status for an event.
    pub fn update_rsvp(&mut self, event_id: &str, status: RsvpStatus) {
        match self.events.iter_mut().find(|e| e.id == event_id) {
            Some(event) => {
                event.rsvp_status = status;
                tracing::debug!(event_id, ?status, "RSVP updated");
                self.queue_persist();
            }
            None => tracing::debug!(event_id, "RSVP update for unknown event, ignoring"),
        }
    }

    /// Prepend a new issue ticket and award points.
    ///
    /// The draft is accepted as-is — empty title/details are the submitting
    /// screen's enforcement problem. The new ticket starts at `Received` with
    /// one seeded acknowledgement entry in its update log.
    pub fn submit_issue(&mut self, draft: IssueDraft) {
        self.issue_seq += 1;
        let ticket = IssueTicket {
            id: format!(
                "issue-{}-{}",
                chrono::Utc::now().timestamp_millis(),
                self.issue_seq
            ),
            category: draft.category,
            title: draft.title,
            details: draft.details,
            anonymous: draft.anonymous,
            status: IssueStatus::Received,
            created_at: Local::now().format("%a %b %d %Y").to_string(),
            updates: vec!["Team acknowledged".to_string()],
        };
        tracing::info!(issue_id = %ticket.id, category = ?ticket.category, "Issue submitted");
        self.issues.insert(0, ticket);
        self.profile.points += POINTS_PER_ISSUE;
        self.queue_persist();
    }

    /// Flip a task's completion state.
    ///
    /// Adds [`HOURS_PER_TOGGLE`] to the profile's volunteer hours on every
    /// call, including when un-completing — a documented asymmetry inherited
    /// from the product behavior, flagged to product owners rather than fixed
    /// here.
    pub fn toggle_task(&mut self, task_id: &str) {
        match self.tasks.iter_mut().find(|t| t.id == task_id) {
            Some(task) => {
                task.completed = !task.completed;
                self.profile.volunteer_hours += HOURS_PER_TOGGLE;
                tracing::debug!(task_id, completed = task.completed, "Task toggled");
                self.queue_persist();
            }
            None => tracing::debug!(task_id, "Toggle for unknown task, ignoring"),
        }
    }

    /// Mark a payment successful and force the profile's dues status to paid.
    ///
    /// The dues flip is unconditional and has no linkage to which payment was
    /// marked or its amount.
    pub fn mark_payment_success(&mut self, payment_id: &str) {
        match self.payments.iter_mut().find(|p| p.id == payment_id) {
            Some(payment) => {
                payment.status = PaymentStatus::Success;
                self.profile.dues_status = DuesStatus::Paid;
                tracing::info!(payment_id, "Payment marked successful");
                self.queue_persist();
            }
            None => tracing::debug!(payment_id, "Payment update for unknown id, ignoring"),
        }
    }

    /// Record learning module progress, clamped to 0..=100.
    pub fn set_learning_progress(&mut self, percent: u8) {
        self.learning_progress = percent.min(100);
        self.queue_persist();
    }

    // ========================================================================
    // Session (external auth collaborator)
    // ========================================================================

    pub fn login(&mut self) {
        self.authenticated = true;
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }

    // ========================================================================
    // Cache Lifecycle
    // ========================================================================

    /// Hydrate once from the local cache, overlaying cached fields onto seeds.
    ///
    /// Runs at most once per store; later calls are no-ops. Every failure mode
    /// (missing blob, storage error, unparseable JSON, malformed field) keeps
    /// the affected field at its seed value and logs — nothing is surfaced to
    /// callers.
    pub async fn hydrate(&mut self, cache: &CacheDb) {
        if self.hydrated {
            tracing::debug!("Hydration already ran, skipping");
            return;
        }
        self.hydrated = true;

        let raw = match cache.get_blob(CACHE_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("No cached state, keeping seed values");
                return;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Cache load failed, keeping seed values");
                return;
            }
        };
        self.apply_cached_blob(&raw);
    }

    /// Per-field overlay, not an atomic swap: each top-level field is parsed
    /// independently, so a partially-corrupt cache still hydrates the fields
    /// that did parse.
    fn apply_cached_blob(&mut self, raw: &str) {
        let parsed: Value = match serde_json::from_str(raw) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "Cached blob unparseable, keeping seed values");
                return;
            }
        };
        let Some(map) = parsed.as_object() else {
            tracing::warn!("Cached blob is not an object, keeping seed values");
            return;
        };

        overlay_field(&mut self.profile, map, "profile");
        overlay_field(&mut self.feed, map, "feed");
        overlay_field(&mut self.events, map, "events");
        overlay_field(&mut self.issues, map, "issues");
        overlay_field(&mut self.tasks, map, "tasks");
        overlay_field(&mut self.payments, map, "payments");
        overlay_field(&mut self.learning_progress, map, "learningProgress");
        // Same 0..=100 bound set_learning_progress enforces
        self.learning_progress = self.learning_progress.min(100);
        tracing::info!(
            issues = self.issues.len(),
            events = self.events.len(),
            tasks = self.tasks.len(),
            "Hydrated state from cache"
        );
    }

    /// Snapshot of exactly the persisted fields.
    pub fn snapshot(&self) -> CacheSnapshot {
        CacheSnapshot {
            profile: self.profile.clone(),
            feed: self.feed.clone(),
            events: self.events.clone(),
            issues: self.issues.clone(),
            tasks: self.tasks.clone(),
            payments: self.payments.clone(),
            learning_progress: self.learning_progress,
        }
    }

    fn queue_persist(&self) {
        if let Some(handle) = &self.persist {
            handle.enqueue(self.snapshot());
        }
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace `target` with the cached value under `key`, if present and
/// well-formed. Absent keys keep the seed value silently; malformed values
/// keep it with a warning.
fn overlay_field<T: DeserializeOwned>(target: &mut T, map: &Map<String, Value>, key: &str) {
    let Some(value) = map.get(key) else {
        return;
    };
    match serde_json::from_value::<T>(value.clone()) {
        Ok(parsed) => *target = parsed,
        Err(e) => tracing::warn!(field = key, error = %e, "Skipping malformed cached field"),
    }
}

// ============================================================================
// Tests
// ============================================================================
