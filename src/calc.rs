use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{AttendanceRecord, AttendanceStatus};

/// Per-subject attendance tally, derived from a student's flat record list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectAttendanceSummary {
    pub subject_name: String,
    pub subject_code: String,
    pub present_count: u32,
    pub total_sessions: u32,
}

impl SubjectAttendanceSummary {
    pub fn percentage(&self) -> f64 {
        subject_percentage(self.present_count, self.total_sessions)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallAttendance {
    pub present_percentage: f64,
    pub absent_percentage: f64,
}

/// Group a flat attendance history by subject name. Every record counts one
/// session; only `Present` records count toward `present_count`. The subject
/// code is taken from the first record seen for that subject.
pub fn group_by_subject(
    records: &[AttendanceRecord],
) -> BTreeMap<String, SubjectAttendanceSummary> {
    let mut by_subject: BTreeMap<String, SubjectAttendanceSummary> = BTreeMap::new();
    for record in records {
        let entry = by_subject
            .entry(record.subject_name.clone())
            .or_insert_with(|| SubjectAttendanceSummary {
                subject_name: record.subject_name.clone(),
                subject_code: record.subject_code.clone(),
                present_count: 0,
                total_sessions: 0,
            });
        entry.total_sessions += 1;
        if record.status == AttendanceStatus::Present {
            entry.present_count += 1;
        }
    }
    by_subject
}

/// An unattended subject reports 0%, not NaN.
pub fn subject_percentage(present_count: u32, total_sessions: u32) -> f64 {
    if total_sessions == 0 {
        return 0.0;
    }
    100.0 * f64::from(present_count) / f64::from(total_sessions)
}

/// Aggregate-first overall percentage: total presents over total sessions
/// across all subjects combined. A student with 1 attended session in one
/// subject and 99 missed in another reports ~1%, not the 50% an
/// average-of-averages would claim.
pub fn overall_percentage(records: &[AttendanceRecord]) -> f64 {
    let mut present: u32 = 0;
    let mut total: u32 = 0;
    for summary in group_by_subject(records).values() {
        present += summary.present_count;
        total += summary.total_sessions;
    }
    subject_percentage(present, total)
}

pub fn overall_attendance(records: &[AttendanceRecord]) -> OverallAttendance {
    let present_percentage = overall_percentage(records);
    OverallAttendance {
        present_percentage,
        absent_percentage: 100.0 - present_percentage,
    }
}
