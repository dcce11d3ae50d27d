use serde::{Deserialize, Serialize};
use crate::model::attendance::MonthlyAttendance;

pub const DEFAULT_MIN_ATTENDANCE: u8 = 75;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AttendanceSummary {
    pub monthly: Vec<MonthlyAttendance>,
    pub attended_lectures: u32,
    pub total_lectures: u32,
    pub overall: u32, // Percent, rounded down
    pub min_attendance: u8,
    pub below_minimum: bool,
}

impl AttendanceSummary {
    pub fn new(monthly: Vec<MonthlyAttendance>, min_attendance: u8) -> Self {
        let (attended_lectures, total_lectures) = totals(&monthly);
        let overall = percentage(attended_lectures, total_lectures);
        Self {
            monthly,
            attended_lectures,
            total_lectures,
            overall,
            min_attendance,
            below_minimum: overall < min_attendance as u32,
        }
    }
}

/// `100 * attended / total` over all rows, truncated. Zero when nothing was scheduled.
pub fn overall_percentage(monthly: &[MonthlyAttendance]) -> u32 {
    let (attended, total) = totals(monthly);
    percentage(attended, total)
}

fn totals(monthly: &[MonthlyAttendance]) -> (u32, u32) {
    monthly.iter().fold((0, 0), |(attended, total), m| {
        (attended + m.attended_lectures, total + m.total_lectures)
    })
}

/// `100 * attended / total`, truncated. Zero when `total` is zero.
pub fn percentage(attended: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (attended as u64 * 100 / total as u64) as u32
}
