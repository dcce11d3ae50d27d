pub mod file;
pub mod traits;

// Re-export
pub use file::FileCalendarSource;
pub use traits::CalendarSource;
