//! Built-in seed values used before (or absent) cache hydration.
//!
//! The store starts from these and overlays whatever the local cache holds.
//! Consumers must tolerate seed values appearing transiently on first render —
//! there is no loading gate between construction and hydration.
use crate::model::{
    DuesStatus, EventItem, FeedCategory, FeedItem, IssueCategory, IssueStatus, IssueTicket,
    LeaderboardEntry, MediaItem, MediaType, MemberProfile, MemberRole, OpportunityItem,
    OpportunityType, PaymentRecord, PaymentStatus, RsvpStatus, TaskGroup, TaskPriority,
    VolunteerTask,
};

/// Seed learning module progress, percent complete.
pub const LEARNING_PROGRESS: u8 = 72;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn profile() -> MemberProfile {
    MemberProfile {
        id: "member-001".to_string(),
        first_name: "Adjoa".to_string(),
        last_name: "Mensah".to_string(),
        gender: "Female".to_string(),
        hall: "Oguaa Hall".to_string(),
        faculty: "Humanities".to_string(),
        department: "Political Science".to_string(),
        level: "400".to_string(),
        program: "Political Science with History".to_string(),
        role: MemberRole::Verified,
        verified: true,
        points: 870,
        volunteer_hours: 56,
        badges: strings(&["Mobilizer", "Policy Pro", "Attendance Elite"]),
        membership_id: "TEIN-UCC-2025-045".to_string(),
        dues_status: DuesStatus::Paid,
        membership_history: strings(&["Enrolled 2021", "Verified 2022", "Volunteer Lead 2024"]),
    }
}

pub fn feed() -> Vec<FeedItem> {
    vec![
        FeedItem {
            id: "feed-1".to_string(),
            category: FeedCategory::Announcement,
            title: "Campus Dialogue with Youth Wing Leaders".to_string(),
            summary: "Meet Hon. Sammy Gyamfi this Friday at the ceremonial grounds. Seats limited."
                .to_string(),
            timestamp: "2h ago".to_string(),
            faculty_tags: strings(&["Humanities", "Education"]),
        },
        FeedItem {
            id: "feed-2".to_string(),
            category: FeedCategory::Policy,
            title: "What the 24-hour Economy Means for Students".to_string(),
            summary: "Digestible explainer with infographics and actionable talking points"
                .to_string(),
            timestamp: "5h ago".to_string(),
            faculty_tags: strings(&["Business", "Science"]),
        },
        FeedItem {
            id: "feed-3".to_string(),
            category: FeedCategory::Event,
            title: "Volunteer Sprint for Komenda Outreach".to_string(),
            summary: "Logistics, transport and media coverage teams needed".to_string(),
            timestamp: "Yesterday".to_string(),
            faculty_tags: strings(&["Humanities", "Law", "Education"]),
        },
    ]
}

pub fn events() -> Vec<EventItem> {
    vec![
        EventItem {
            id: "event-1".to_string(),
            title: "TEIN Policy Night".to_string(),
            date: "Sat, Feb 15".to_string(),
            time: "6:00 PM".to_string(),
            venue: "Amissah-Arthur Hall".to_string(),
            banner: "https://images.unsplash.com/photo-1469474968028-56623f02e42e".to_string(),
            description: "Immersive policy education with breakout rooms per faculty. Limited seats."
                .to_string(),
            tags: strings(&["Policy", "Education"]),
            rsvp_status: RsvpStatus::Going,
            attendance_code: "TPN6543".to_string(),
            recap_photos: strings(&[
                "https://images.unsplash.com/photo-1529333166437-7750a6dd5a70",
                "https://images.unsplash.com/photo-1469474968028-56623f02e42e",
            ]),
        },
        EventItem {
            id: "event-2".to_string(),
            title: "Volunteer Deployment - Komenda Block".to_string(),
            date: "Tue, Feb 25".to_string(),
            time: "8:30 AM".to_string(),
            venue: "SRC Park".to_string(),
            banner: "https://images.unsplash.com/photo-1489515217757-5fd1be406fef".to_string(),
            description: "Door-to-door canvassing, welfare checks and listening posts.".to_string(),
            tags: strings(&["Volunteer", "Field"]),
            rsvp_status: RsvpStatus::Interested,
            attendance_code: "VOL8891".to_string(),
            recap_photos: Vec::new(),
        },
        EventItem {
            id: "event-3".to_string(),
            title: "Media Lab: Storytelling for TEIN".to_string(),
            date: "Thu, Mar 6".to_string(),
            time: "4:00 PM".to_string(),
            venue: "TEIN Studio".to_string(),
            banner: "https://images.unsplash.com/photo-1503424886307-b090341d25d1".to_string(),
            description: "Hands-on audio + video sprint for rapid content production.".to_string(),
            tags: strings(&["Media", "Training"]),
            rsvp_status: RsvpStatus::None,
            attendance_code: "MED4410".to_string(),
            recap_photos: Vec::new(),
        },
    ]
}

pub fn issues() -> Vec<IssueTicket> {
    vec![
        IssueTicket {
            id: "issue-1".to_string(),
            category: IssueCategory::Accommodation,
            title: "Leaking roof at Oguaa Annex".to_string(),
            details: "Block B third floor leaks when it rains, affects 12 rooms.".to_string(),
            anonymous: false,
            status: IssueStatus::InProgress,
            created_at: "Jan 18".to_string(),
            updates: strings(&["Welfare desk assigned team", "Facility management notified"]),
        },
        IssueTicket {
            id: "issue-2".to_string(),
            category: IssueCategory::Academic,
            title: "Missing grade for POLS 402".to_string(),
            details: "Entire tutorial group has no grade on portal.".to_string(),
            anonymous: true,
            status: IssueStatus::Escalated,
            created_at: "Jan 06".to_string(),
            updates: strings(&["Faculty rep compiling list", "Dean engagement scheduled"]),
        },
    ]
}

pub fn tasks() -> Vec<VolunteerTask> {
    vec![
        VolunteerTask {
            id: "task-1".to_string(),
            group: TaskGroup::Outreach,
            title: "Komenda Voter Mapping".to_string(),
            due_date: "Feb 20".to_string(),
            hours: 6,
            completed: false,
            priority: TaskPriority::High,
        },
        VolunteerTask {
            id: "task-2".to_string(),
            group: TaskGroup::Media,
            title: "Micro-podcast on Free SHS".to_string(),
            due_date: "Feb 16".to_string(),
            hours: 3,
            completed: true,
            priority: TaskPriority::Medium,
        },
        VolunteerTask {
            id: "task-3".to_string(),
            group: TaskGroup::Research,
            title: "Campus cost-of-living survey".to_string(),
            due_date: "Feb 28".to_string(),
            hours: 5,
            completed: false,
            priority: TaskPriority::High,
        },
    ]
}

pub fn media() -> Vec<MediaItem> {
    vec![
        MediaItem {
            id: "media-1".to_string(),
            media_type: MediaType::Video,
            title: "TEIN 101 in 60 seconds".to_string(),
            description: "Animated primer for freshers".to_string(),
            url: "https://images.unsplash.com/photo-1470723710355-95304d8aece4".to_string(),
            thumbnail: "https://images.unsplash.com/photo-1451187580459-43490279c0fa".to_string(),
        },
        MediaItem {
            id: "media-2".to_string(),
            media_type: MediaType::Poster,
            title: "Volunteer Sprint Poster".to_string(),
            description: "Share-ready asset".to_string(),
            url: "https://images.unsplash.com/photo-1504384308090-c894fdcc538d".to_string(),
            thumbnail: "https://images.unsplash.com/photo-1504384308090-c894fdcc538d".to_string(),
        },
        MediaItem {
            id: "media-3".to_string(),
            media_type: MediaType::Audio,
            title: "Voice note from Organizer".to_string(),
            description: "2-min mobilization brief".to_string(),
            url: "https://images.unsplash.com/photo-1484704849700-f032a568e944".to_string(),
            thumbnail: "https://images.unsplash.com/photo-1484704849700-f032a568e944".to_string(),
        },
    ]
}

pub fn opportunities() -> Vec<OpportunityItem> {
    vec![
        OpportunityItem {
            id: "opp-1".to_string(),
            opportunity_type: OpportunityType::Internship,
            organization: "Ministry of Finance".to_string(),
            title: "Budget Analytics Internship".to_string(),
            deadline: "Mar 4".to_string(),
            highlights: strings(&["Paid", "Preference for level 300/400"]),
        },
        OpportunityItem {
            id: "opp-2".to_string(),
            opportunity_type: OpportunityType::Scholarship,
            organization: "NDC Youth Wing".to_string(),
            title: "Policy Research Fellowship".to_string(),
            deadline: "Feb 22".to_string(),
            highlights: strings(&["1-year", "Mentorship"]),
        },
        OpportunityItem {
            id: "opp-3".to_string(),
            opportunity_type: OpportunityType::Announcement,
            organization: "Campus Jobs".to_string(),
            title: "Voter Education Fellows".to_string(),
            deadline: "Rolling".to_string(),
            highlights: strings(&["Stipend", "Flexible hours"]),
        },
    ]
}

pub fn payments() -> Vec<PaymentRecord> {
    vec![
        PaymentRecord {
            id: "pay-1".to_string(),
            label: "2025 Semester Dues".to_string(),
            amount: "GH₵40".to_string(),
            date: "Jan 04".to_string(),
            method: "MTN MoMo".to_string(),
            status: PaymentStatus::Success,
        },
        PaymentRecord {
            id: "pay-2".to_string(),
            label: "Solidarity Fund Donation".to_string(),
            amount: "GH₵20".to_string(),
            date: "Dec 15".to_string(),
            method: "Card".to_string(),
            status: PaymentStatus::Success,
        },
    ]
}

pub fn leaderboard() -> Vec<LeaderboardEntry> {
    vec![
        LeaderboardEntry {
            name: "Kwesi A.".to_string(),
            hours: 82,
            hall: "Valco".to_string(),
        },
        LeaderboardEntry {
            name: "Adjoa M.".to_string(),
            hours: 56,
            hall: "Oguaa".to_string(),
        },
        LeaderboardEntry {
            name: "Zainab K.".to_string(),
            hours: 49,
            hall: "Adehye".to_string(),
        },
    ]
}
