/// Supplies academic calendar text that has already been extracted from its document.
pub trait CalendarSource {
    /// Returns the plain text, or an empty string if it could not be read.
    fn read_text(&self) -> String;
}

impl CalendarSource for str {
    fn read_text(&self) -> String {
        self.to_string()
    }
}
