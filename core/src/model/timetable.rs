use chrono::Weekday;
use std::collections::HashMap;
use crate::time::parse_weekday_str;

pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Weekly recurring schedule: the subjects lectured on each day.
///
/// Subjects keep their entry order. A subject listed twice on one day is
/// two lectures on that day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timetable {
    days: HashMap<Weekday, Vec<String>>,
}

impl Timetable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a timetable from free-form day names ("Monday", "mon", "TUE").
    /// Keys that name no weekday are dropped. Keys naming the same day are
    /// merged in sorted key order.
    pub fn from_named(named: HashMap<String, Vec<String>>) -> Self {
        let mut named: Vec<_> = named.into_iter().collect();
        named.sort_by(|a, b| a.0.cmp(&b.0));

        let mut timetable = Self::new();
        for (name, subjects) in named {
            match parse_weekday_str(&name) {
                Ok(day) => {
                    timetable.days.entry(day).or_default().extend(subjects);
                }
                Err(_) => {
                    tracing::warn!(key = %name, "dropping timetable entry with unknown day name");
                }
            }
        }
        timetable
    }

    pub fn with_day(mut self, day: Weekday, subjects: Vec<String>) -> Self {
        self.set_day(day, subjects);
        self
    }

    /// Replaces the subjects for `day`. An empty list clears the day.
    pub fn set_day(&mut self, day: Weekday, subjects: Vec<String>) {
        if subjects.is_empty() {
            self.days.remove(&day);
        } else {
            self.days.insert(day, subjects);
        }
    }

    pub fn subjects_on(&self, day: Weekday) -> &[String] {
        self.days.get(&day).map(|s| s.as_slice()).unwrap_or(&[])
    }

    /// Distinct subjects, in the order they first appear from Monday onwards.
    pub fn subjects(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for day in WEEK {
            for subject in self.subjects_on(day) {
                if !seen.contains(subject) {
                    seen.push(subject.clone());
                }
            }
        }
        seen
    }

    pub fn is_empty(&self) -> bool {
        self.days.values().all(|s| s.is_empty())
    }
}
