//! Derived analytics for the impact dashboard.
//!
//! Recomputed on read from current store state; never persisted to the cache.
//! Attendance totals and the faculty breakdown are static snapshot constants
//! in this core — only `task_completion` is truly derived.
use serde::Serialize;

use crate::model::VolunteerTask;

/// Aggregate attendance counters across chapter events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Attendance {
    pub total: u32,
    pub returning: u32,
    pub newcomers: u32,
}

/// Share of attendance by faculty, in percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacultySlice {
    pub faculty: &'static str,
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub attendance: Attendance,
    pub faculty_breakdown: Vec<FacultySlice>,
    /// Percentage of volunteer tasks with `completed = true`, 0..=100.
    pub task_completion: u8,
}

const ATTENDANCE: Attendance = Attendance {
    total: 612,
    returning: 441,
    newcomers: 171,
};

const FACULTY_BREAKDOWN: [FacultySlice; 5] = [
    FacultySlice { faculty: "Humanities", percent: 32 },
    FacultySlice { faculty: "Business", percent: 21 },
    FacultySlice { faculty: "Science", percent: 19 },
    FacultySlice { faculty: "Education", percent: 17 },
    FacultySlice { faculty: "Law", percent: 11 },
];

impl Analytics {
    /// Compute analytics for the current task list.
    pub fn compute(tasks: &[VolunteerTask]) -> Self {
        Self {
            attendance: ATTENDANCE,
            faculty_breakdown: FACULTY_BREAKDOWN.to_vec(),
            task_completion: task_completion(tasks),
        }
    }
}

/// Rounded completion percentage. An empty task list is defined as 0, not NaN.
pub fn task_completion(tasks: &[VolunteerTask]) -> u8 {
    if tasks.is_empty() {
        return 0;
    }
    let completed = tasks.iter().filter(|t| t.completed).count();
    let pct = (completed as f64 / tasks.len() as f64 * 100.0).round();
    pct as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn task(id: &str, completed: bool) -> VolunteerTask {
        VolunteerTask {
            id: id.to_string(),
            group: crate::model::TaskGroup::Outreach,
            title: "t".to_string(),
            due_date: "Feb 1".to_string(),
            hours: 1,
            completed,
            priority: crate::model::TaskPriority::Low,
        }
    }

    #[test]
    fn test_one_of_four_completed_is_25() {
        let tasks = vec![
            task("a", true),
            task("b", false),
            task("c", false),
            task("d", false),
        ];
        assert_eq!(task_completion(&tasks), 25);
    }

    #[test]
    fn test_empty_task_list_is_zero_not_nan() {
        assert_eq!(task_completion(&[]), 0);
    }

    #[test]
    fn test_all_completed_is_100() {
        let tasks = vec![task("a", true), task("b", true)];
        assert_eq!(task_completion(&tasks), 100);
    }

    #[test]
    fn test_one_of_three_rounds_to_33() {
        let tasks = vec![task("a", true), task("b", false), task("c", false)];
        assert_eq!(task_completion(&tasks), 33);
    }

    #[test]
    fn test_two_of_three_rounds_to_67() {
        let tasks = vec![task("a", true), task("b", true), task("c", false)];
        assert_eq!(task_completion(&tasks), 67);
    }

    #[test]
    fn test_attendance_snapshot_constants() {
        let analytics = Analytics::compute(&[]);
        assert_eq!(analytics.attendance.total, 612);
        assert_eq!(
            analytics.attendance.returning + analytics.attendance.newcomers,
            analytics.attendance.total
        );
        assert_eq!(analytics.faculty_breakdown.len(), 5);
        let percent_sum: u32 = analytics
            .faculty_breakdown
            .iter()
            .map(|s| u32::from(s.percent))
            .sum();
        assert_eq!(percent_sum, 100);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn task_completion_stays_in_range(flags in proptest::collection::vec(any::<bool>(), 0..64)) {
                let tasks: Vec<_> = flags
                    .iter()
                    .enumerate()
                    .map(|(i, &done)| task(&format!("task-{i}"), done))
                    .collect();
                let pct = task_completion(&tasks);
                prop_assert!(pct <= 100);
            }

            #[test]
            fn all_or_nothing_hits_exact_bounds(n in 1usize..32) {
                let none: Vec<_> = (0..n).map(|i| task(&format!("t{i}"), false)).collect();
                let all: Vec<_> = (0..n).map(|i| task(&format!("t{i}"), true)).collect();
                prop_assert_eq!(task_completion(&none), 0);
                prop_assert_eq!(task_completion(&all), 100);
            }
        }
    }
}
