use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarEvent {
    pub date: NaiveDate,
    pub is_holiday: bool,
}

impl CalendarEvent {
    pub fn new(date: NaiveDate, is_holiday: bool) -> Self {
        Self { date, is_holiday }
    }

    pub fn holiday(date: NaiveDate) -> Self {
        Self::new(date, true)
    }
}
