pub mod attendance;
pub mod event;
pub mod timetable;
