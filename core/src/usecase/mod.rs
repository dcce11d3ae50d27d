pub mod monthly_attendance;
