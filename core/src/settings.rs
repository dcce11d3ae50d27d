use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::service::summary::DEFAULT_MIN_ATTENDANCE;

const SETTINGS_FILE_NAME: &str = "settings.json";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    #[serde(default = "default_min_attendance")]
    pub min_attendance: u8, // Percent, 0..=100
}

fn default_min_attendance() -> u8 {
    DEFAULT_MIN_ATTENDANCE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_attendance: DEFAULT_MIN_ATTENDANCE,
        }
    }
}

impl Settings {
    pub fn with_min_attendance(mut self, min_attendance: u8) -> Result<Self> {
        if min_attendance > 100 {
            return Err(anyhow!("Minimum attendance must be between 0 and 100, got {}", min_attendance));
        }
        self.min_attendance = min_attendance;
        Ok(self)
    }
}

#[derive(Clone)]
pub struct FileSettingsRepository {
    file_path: PathBuf,
}

impl FileSettingsRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(".attendance")
            }
        };
        path.push(SETTINGS_FILE_NAME);
        Ok(Self { file_path: path })
    }

    pub fn path(&self) -> &PathBuf {
        &self.file_path
    }

    /// Stored settings, or the defaults when nothing has been saved yet.
    pub fn load(&self) -> Result<Settings> {
        if !self.file_path.exists() {
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;
        let settings: Settings = serde_json::from_str(&content)
            .with_context(|| format!("Invalid settings in {}", self.file_path.display()))?;
        // Re-validate values edited by hand.
        Settings::default().with_min_attendance(settings.min_attendance)
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(dir) = self.file_path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.file_path, content)?;
        tracing::debug!(path = %self.file_path.display(), "settings saved");
        Ok(())
    }
}
