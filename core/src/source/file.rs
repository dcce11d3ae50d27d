use std::fs;
use std::path::PathBuf;

use crate::source::traits::CalendarSource;

#[derive(Clone, Debug)]
pub struct FileCalendarSource {
    file_path: PathBuf,
}

impl FileCalendarSource {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self { file_path: file_path.into() }
    }
}

impl CalendarSource for FileCalendarSource {
    fn read_text(&self) -> String {
        match fs::read(&self.file_path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                tracing::warn!(path = %self.file_path.display(), error = %e, "could not read calendar text");
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_file_text() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "15/09/2023 Holiday").unwrap();

        let source = FileCalendarSource::new(file.path());
        assert_eq!(source.read_text(), "15/09/2023 Holiday\n");
    }

    #[test]
    fn test_missing_file_is_empty_text() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileCalendarSource::new(dir.path().join("missing.txt"));
        assert_eq!(source.read_text(), "");
    }

    #[test]
    fn test_str_source() {
        assert_eq!("01/01/2024 Holiday".read_text(), "01/01/2024 Holiday");
    }
}
