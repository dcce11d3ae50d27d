use chrono::NaiveDate;
use crate::model::event::CalendarEvent;

const CALENDAR_DATE_FORMAT: &str = "%d/%m/%Y";

/// Parses academic calendar text into events.
///
/// Each line is read as `DD/MM/YYYY <type> ...`. The line is a holiday when
/// the type token contains "holiday" (any case). Lines that don't fit are
/// skipped, so the worst case is an empty list.
pub fn parse_academic_calendar(text: &str) -> Vec<CalendarEvent> {
    let mut events = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let mut tokens = line.split_whitespace();
        let (Some(date_token), Some(kind)) = (tokens.next(), tokens.next()) else {
            continue;
        };

        match parse_calendar_date(date_token) {
            Some(date) => {
                let is_holiday = kind.to_lowercase().contains("holiday");
                events.push(CalendarEvent::new(date, is_holiday));
            }
            None => {
                tracing::debug!(line = index + 1, token = date_token, "skipping calendar line without a valid date");
            }
        }
    }

    events
}

fn parse_calendar_date(token: &str) -> Option<NaiveDate> {
    // chrono accepts single-digit fields and longer years; the calendar format doesn't.
    let mut parts = token.split('/');
    let shape_ok = matches!(
        (parts.next(), parts.next(), parts.next(), parts.next()),
        (Some(d), Some(m), Some(y), None)
            if d.len() == 2 && m.len() == 2 && y.len() == 4
                && [d, m, y].iter().all(|p| p.bytes().all(|b| b.is_ascii_digit()))
    );
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(token, CALENDAR_DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_mixed_lines() {
        let events = parse_academic_calendar("15/09/2023 Holiday\nbad line\n16/09/2023 Working");
        assert_eq!(
            events,
            vec![
                CalendarEvent::new(date(2023, 9, 15), true),
                CalendarEvent::new(date(2023, 9, 16), false),
            ]
        );
    }

    #[test]
    fn test_parse_nothing_usable() {
        assert!(parse_academic_calendar("").is_empty());
        assert!(parse_academic_calendar("Academic Calendar 2023\n\n15/09/2023\n").is_empty());
        assert!(parse_academic_calendar("31/02/2023 Holiday\n1/9/2023 Holiday").is_empty());
    }

    #[test]
    fn test_signed_year_rejected() {
        assert!(parse_academic_calendar("15/09/+023 Holiday").is_empty());
        assert!(parse_academic_calendar("15/09/-001 Holiday").is_empty());
        assert!(parse_academic_calendar("+1/09/2023 Holiday\n15/-9/2023 Holiday").is_empty());
        assert_eq!(parse_academic_calendar("15/09/+023 Holiday\n15/09/2023 Holiday").len(), 1);
    }

    #[test]
    fn test_holiday_match_is_substring_of_second_token() {
        let events = parse_academic_calendar(
            "  02/10/2023   PublicHOLIDAY  \n03/10/2023\tExam holiday\n04/10/2023 holidays",
        );
        let flags: Vec<bool> = events.iter().map(|e| e.is_holiday).collect();
        assert_eq!(flags, vec![true, false, true]);
    }

    #[test]
    fn test_duplicates_kept_in_order() {
        let events = parse_academic_calendar("25/12/2023 Holiday\n01/12/2023 Exam\n25/12/2023 Holiday");
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].date, date(2023, 12, 25));
        assert_eq!(events[1].date, date(2023, 12, 1));
        assert_eq!(events[2], events[0]);
    }
}
