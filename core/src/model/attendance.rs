use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};
use crate::service::summary::percentage;

/// Subject name -> dates on which that subject's lecture was attended.
pub type AttendanceRecords = HashMap<String, BTreeSet<NaiveDate>>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthlyAttendance {
    pub subject: String,
    pub month: String, // "January", "February", ...
    pub attended_lectures: u32,
    pub total_lectures: u32,
}

impl MonthlyAttendance {
    /// Attended share in percent, truncated like the overall figure.
    pub fn percent(&self) -> u32 {
        percentage(self.attended_lectures, self.total_lectures)
    }
}
