//! Pairwise overlap arithmetic and longest-period selection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assignment::Assignment;

const MS_PER_DAY: f64 = 86_400_000.0;

/// Winning pair of a longest-overlap scan.
///
/// All fields stay `None` until some pair beats the zero-day starting
/// maximum, so a pair overlapping for 0 whole days never populates the
/// report and an empty report doubles as "no winner".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<i64>,
}

impl PairReport {
    /// True when no qualifying pair was found.
    pub fn is_empty(&self) -> bool {
        self.days.is_none()
    }
}

/// Whether two assignments represent time-overlapping work on the same
/// project. Ranges are inclusive at both ends, so touching endpoints count.
pub fn worked_together(first: &Assignment, second: &Assignment) -> bool {
    first.project_id == second.project_id
        && first.date_to >= second.date_from
        && first.date_from <= second.date_to
}

/// Difference between two instants in whole days, rounded half-up.
fn days_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let diff_ms = (end - start).num_milliseconds() as f64;
    (diff_ms / MS_PER_DAY).round() as i64
}

/// Scan every unordered pair of assignments and keep the pair with the
/// most overlapping days on a shared project.
///
/// The winner's first field is always the lower original-position record.
/// A later pair replaces the current best only on strictly more days, so
/// ties keep the first pair found in scan order.
pub fn longest_period(assignments: &[Assignment]) -> PairReport {
    let mut report = PairReport::default();
    let mut best_days = 0;

    for (i, first) in assignments.iter().enumerate() {
        for second in &assignments[i + 1..] {
            if !worked_together(first, second) {
                continue;
            }

            let start = first.date_from.max(second.date_from);
            let end = first.date_to.min(second.date_to);
            let days = days_between(start, end);

            if best_days < days {
                best_days = days;
                report = PairReport {
                    first_employee_id: Some(first.employee_id.clone()),
                    second_employee_id: Some(second.employee_id.clone()),
                    project_id: Some(first.project_id.clone()),
                    days: Some(days),
                };
            }
        }
    }

    report
}
