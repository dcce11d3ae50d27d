pub mod calendar;
pub mod input;
pub mod model;
pub mod service;
pub mod settings;
pub mod source;
pub mod time;
pub mod usecase;

pub use calendar::parse_academic_calendar;
pub use input::{parse_subjects, parse_timetable_args};
pub use model::attendance::{AttendanceRecords, MonthlyAttendance};
pub use model::event::CalendarEvent;
pub use model::timetable::Timetable;
pub use service::summary::{overall_percentage, AttendanceSummary, DEFAULT_MIN_ATTENDANCE};
pub use settings::{FileSettingsRepository, Settings};
pub use source::{CalendarSource, FileCalendarSource};
pub use time::{month_bounds, parse_date_arg};
pub use usecase::monthly_attendance::{assume_full_attendance, calculate_monthly_attendance};
