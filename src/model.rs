//! Domain records owned by the state store.
//!
//! Every record here is a plain data carrier: the store is the only mutator,
//! screens receive borrowed read-only views. Wire names use camelCase so the
//! persisted cache blob keeps the layout the mobile client already writes —
//! a cache produced by an older build hydrates without migration.
use serde::{Deserialize, Serialize};

// ============================================================================
// Member Profile
// ============================================================================

/// Membership role, in ascending order of involvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Member,
    Verified,
    Volunteer,
    Executive,
    Alumni,
}

/// Whether the current semester's dues have been settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuesStatus {
    Paid,
    Pending,
}

/// The singleton member profile.
///
/// `points` and `volunteer_hours` are monotonically non-decreasing: issue
/// submission awards points, task toggling awards hours, and nothing ever
/// subtracts. `badges` and `membership_history` are display-only lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub hall: String,
    pub faculty: String,
    pub department: String,
    pub level: String,
    pub program: String,
    pub role: MemberRole,
    pub verified: bool,
    pub points: u32,
    pub volunteer_hours: u32,
    pub badges: Vec<String>,
    pub membership_id: String,
    pub dues_status: DuesStatus,
    pub membership_history: Vec<String>,
}

// ============================================================================
// Feed
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedCategory {
    Announcement,
    News,
    Policy,
    Event,
}

/// A feed entry. Insertion order is display order; read-only in this core
/// (no create operation — only hydration can replace the list).
///
/// `timestamp` is free text ("2h ago", "Yesterday"), not a parsed time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub id: String,
    pub category: FeedCategory,
    pub title: String,
    pub summary: String,
    pub timestamp: String,
    pub faculty_tags: Vec<String>,
}

// ============================================================================
// Events
// ============================================================================

/// A member's attendance intention for an event. Free bidirectional
/// transitions, no ordering constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RsvpStatus {
    None,
    Going,
    Interested,
}

/// A chapter event with schedule, venue and RSVP state.
///
/// `attendance_code` is a static string. UI copy claims daily rotation but no
/// rotation mechanism exists in this core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventItem {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub banner: String,
    pub description: String,
    pub tags: Vec<String>,
    pub rsvp_status: RsvpStatus,
    pub attendance_code: String,
    pub recap_photos: Vec<String>,
}

// ============================================================================
// Issues
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Academic,
    Fees,
    Accommodation,
    Welfare,
    Security,
}

/// Lifecycle states for an issue ticket.
///
/// Only `Received` is ever produced by this core; the later states exist so
/// seeded and admin-touched tickets round-trip through the cache. Advancing a
/// ticket is an admin-side capability, deliberately not implemented here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueStatus {
    Received,
    #[serde(rename = "In Progress")]
    InProgress,
    Escalated,
    Resolved,
}

/// An issue reported by the member. Newest first in the store's list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueTicket {
    pub id: String,
    pub category: IssueCategory,
    pub title: String,
    pub details: String,
    pub anonymous: bool,
    pub status: IssueStatus,
    pub created_at: String,
    /// Append-only update log, seeded with one acknowledgement entry.
    pub updates: Vec<String>,
}

/// Caller input for `AppStore::submit_issue`.
///
/// The store accepts this as-is; empty title/details are the submitting
/// screen's problem, not validated here.
#[derive(Debug, Clone)]
pub struct IssueDraft {
    pub category: IssueCategory,
    pub title: String,
    pub details: String,
    pub anonymous: bool,
}

// ============================================================================
// Volunteer Tasks
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskGroup {
    Outreach,
    Media,
    Research,
    Welfare,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

/// A volunteer task. Fixed membership — tasks are toggled, never added or
/// removed by this core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerTask {
    pub id: String,
    pub group: TaskGroup,
    pub title: String,
    pub due_date: String,
    pub hours: u32,
    pub completed: bool,
    pub priority: TaskPriority,
}

// ============================================================================
// Media and Opportunities (read-only reference lists)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Photo,
    Video,
    Audio,
    Poster,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub title: String,
    pub description: String,
    pub url: String,
    pub thumbnail: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityType {
    Internship,
    Scholarship,
    Job,
    Announcement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityItem {
    pub id: String,
    #[serde(rename = "type")]
    pub opportunity_type: OpportunityType,
    pub organization: String,
    pub title: String,
    pub deadline: String,
    pub highlights: Vec<String>,
}

// ============================================================================
// Payments
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Success,
    Pending,
}

/// A dues/donation payment record.
///
/// `amount` is a pre-formatted display string ("GH₵40"), not a numeric value —
/// `mark_payment_success` has no linkage to amounts or purposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: String,
    pub label: String,
    pub amount: String,
    pub date: String,
    pub method: String,
    pub status: PaymentStatus,
}

// ============================================================================
// Leaderboard
// ============================================================================

/// Static leaderboard snapshot entry, display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub hours: u32,
    pub hall: String,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_profile_wire_names_are_camel_case() {
        let profile = crate::seed::profile();
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("firstName").is_some());
        assert!(json.get("volunteerHours").is_some());
        assert!(json.get("membershipId").is_some());
        assert_eq!(json["duesStatus"], "paid");
        assert_eq!(json["role"], "verified");
        // No snake_case leakage
        assert!(json.get("first_name").is_none());
    }

    #[test]
    fn test_issue_status_in_progress_wire_value() {
        let json = serde_json::to_string(&IssueStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
        let back: IssueStatus = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(back, IssueStatus::InProgress);
    }

    #[test]
    fn test_task_group_keeps_capitalized_wire_value() {
        assert_eq!(serde_json::to_string(&TaskGroup::Outreach).unwrap(), "\"Outreach\"");
        assert_eq!(serde_json::to_string(&TaskPriority::High).unwrap(), "\"high\"");
    }

    #[test]
    fn test_event_wire_names() {
        let event = &crate::seed::events()[0];
        let json = serde_json::to_value(event).unwrap();
        assert_eq!(json["rsvpStatus"], "going");
        assert!(json.get("attendanceCode").is_some());
        assert!(json.get("recapPhotos").is_some());
    }

    #[test]
    fn test_media_type_field_renamed_to_type() {
        let item = &crate::seed::media()[0];
        let json = serde_json::to_value(item).unwrap();
        assert!(json.get("type").is_some());
        assert!(json.get("mediaType").is_none());
    }

    #[test]
    fn test_rsvp_status_round_trip() {
        for status in [RsvpStatus::None, RsvpStatus::Going, RsvpStatus::Interested] {
            let json = serde_json::to_string(&status).unwrap();
            let back: RsvpStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }
}
