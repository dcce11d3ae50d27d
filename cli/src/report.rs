use attendance_core::time::day_name;
use attendance_core::model::timetable::WEEK;
use attendance_core::{AttendanceSummary, CalendarEvent, Timetable};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct MonthlyRow {
    #[tabled(rename = "Subject")]
    subject: String,
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Attended")]
    attended: u32,
    #[tabled(rename = "Total")]
    total: u32,
    #[tabled(rename = "%")]
    percent: String,
}

#[derive(Tabled)]
struct EventRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "Holiday")]
    holiday: String,
}

#[derive(Tabled)]
struct DayRow {
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "Subjects")]
    subjects: String,
}

fn styled(mut table: Table) -> Table {
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN)); // Header color
    table
}

pub fn show_events(events: &[CalendarEvent]) {
    if events.is_empty() {
        println!("No calendar events found.");
        return;
    }

    let rows: Vec<EventRow> = events
        .iter()
        .map(|e| EventRow {
            date: e.date.format("%Y-%m-%d").to_string(),
            day: e.date.format("%a").to_string(),
            holiday: if e.is_holiday { "yes".to_string() } else { "-".to_string() },
        })
        .collect();

    let holidays = events.iter().filter(|e| e.is_holiday).count();
    println!("{}", styled(Table::new(rows)));
    println!("{} events, {} holidays", events.len(), holidays);
}

pub fn show_timetable(timetable: &Timetable) {
    let rows: Vec<DayRow> = WEEK
        .iter()
        .filter(|day| !timetable.subjects_on(**day).is_empty())
        .map(|day| DayRow {
            day: day_name(*day).to_string(),
            subjects: timetable.subjects_on(*day).join(", "),
        })
        .collect();

    println!("{}", styled(Table::new(rows)));
}

pub fn show_summary(summary: &AttendanceSummary) {
    if summary.monthly.is_empty() {
        println!("No lectures scheduled in this period.");
    } else {
        let rows: Vec<MonthlyRow> = summary
            .monthly
            .iter()
            .map(|m| MonthlyRow {
                subject: m.subject.clone(),
                month: m.month.clone(),
                attended: m.attended_lectures,
                total: m.total_lectures,
                percent: m.percent().to_string(),
            })
            .collect();
        println!("{}", styled(Table::new(rows)));
    }

    println!(
        "\n\x1b[1;36mCurrent Attendance: {}%\x1b[0m ({}/{} lectures, minimum {}%)",
        summary.overall, summary.attended_lectures, summary.total_lectures, summary.min_attendance
    );
    if summary.below_minimum {
        println!("\x1b[1;31mWarning: Attendance below minimum required!\x1b[0m");
    }
}
