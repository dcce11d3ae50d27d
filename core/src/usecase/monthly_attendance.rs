use crate::model::attendance::{AttendanceRecords, MonthlyAttendance};
use crate::model::event::CalendarEvent;
use crate::model::timetable::Timetable;
use crate::time::{dates_between, month_name};
use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeMap, BTreeSet, HashSet};

#[derive(Debug, Clone)]
struct Tally {
    month: String,
    attended: u32,
    total: u32,
}

/// Counts attended and scheduled lectures per subject per month over
/// `start..=end`.
///
/// Holidays cancel every lecture on their date. Months are grouped by name,
/// so a range longer than a year folds the same month of different years
/// together. Rows come out ordered by subject, then calendar month.
pub fn calculate_monthly_attendance(
    timetable: &Timetable,
    events: &[CalendarEvent],
    start: NaiveDate,
    end: NaiveDate,
    attendance_records: &AttendanceRecords,
) -> Vec<MonthlyAttendance> {
    let holidays: HashSet<NaiveDate> = events
        .iter()
        .filter(|e| e.is_holiday)
        .map(|e| e.date)
        .collect();

    // Key: (subject, month number)
    let mut tallies: BTreeMap<(&str, u32), Tally> = BTreeMap::new();

    for date in dates_between(start, end) {
        if holidays.contains(&date) {
            continue;
        }

        for subject in timetable.subjects_on(date.weekday()) {
            let attended = attendance_records
                .get(subject)
                .is_some_and(|dates| dates.contains(&date));

            let tally = tallies
                .entry((subject.as_str(), date.month()))
                .or_insert_with(|| Tally {
                    month: month_name(date),
                    attended: 0,
                    total: 0,
                });
            tally.total += 1;
            if attended {
                tally.attended += 1;
            }
        }
    }

    tracing::debug!(%start, %end, holidays = holidays.len(), rows = tallies.len(), "monthly attendance calculated");

    tallies
        .into_iter()
        .map(|((subject, _), tally)| MonthlyAttendance {
            subject: subject.to_string(),
            month: tally.month,
            attended_lectures: tally.attended,
            total_lectures: tally.total,
        })
        .collect()
}

/// Stand-in for real attendance capture: every scheduled lecture in
/// `start..=end` counts as attended. Holidays are not consulted here; the
/// aggregation already skips them.
pub fn assume_full_attendance(timetable: &Timetable, start: NaiveDate, end: NaiveDate) -> AttendanceRecords {
    let mut records: AttendanceRecords = timetable
        .subjects()
        .into_iter()
        .map(|s| (s, BTreeSet::new()))
        .collect();

    for date in dates_between(start, end) {
        for subject in timetable.subjects_on(date.weekday()) {
            records.entry(subject.clone()).or_default().insert(date);
        }
    }

    records
}
