mod report;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use attendance_core::{
    assume_full_attendance, calculate_monthly_attendance, month_bounds, parse_academic_calendar,
    parse_date_arg, parse_timetable_args, AttendanceRecords, AttendanceSummary, CalendarSource,
    FileCalendarSource, FileSettingsRepository, Timetable,
};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "attendance")]
#[command(about = "Lecture attendance against a weekly timetable and academic calendar", long_about = None)]
struct Cli {
    /// Directory holding settings.json (default: ~/.attendance)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// List the dated events found in academic calendar text
    Events {
        /// Plain-text calendar, one "DD/MM/YYYY Type" entry per line
        file: PathBuf,
    },
    /// Monthly attendance per subject (usage: report --calendar cal.txt mon:Math tue:Math,Physics)
    Report {
        /// Plain-text academic calendar
        #[arg(long)]
        calendar: Option<PathBuf>,
        /// First day of the period (YYYY-MM-DD, today, som, eom). Default: start of this month
        #[arg(long)]
        from: Option<String>,
        /// Last day of the period. Default: end of this month
        #[arg(long)]
        to: Option<String>,
        /// JSON timetable, e.g. {"Monday": ["Math"]}
        #[arg(long)]
        timetable: Option<PathBuf>,
        /// JSON attended dates, e.g. {"Math": ["2023-09-04"]}. Default: every lecture attended
        #[arg(long)]
        attended: Option<PathBuf>,
        /// Minimum attendance percentage for this run
        #[arg(long)]
        min: Option<u8>,
        /// Timetable entries as day:Subject,Subject
        #[arg(trailing_var_arg = true)]
        days: Vec<String>,
    },
    /// Show or change stored settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Subcommand)]
enum ConfigAction {
    /// Print the current settings
    Show,
    /// Set the minimum attendance percentage (0-100)
    SetMin { percent: u8 },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let settings_repo = FileSettingsRepository::new(cli.data_dir)?;

    match cli.command {
        Commands::Events { file } => {
            let text = FileCalendarSource::new(file).read_text();
            report::show_events(&parse_academic_calendar(&text));
        }
        Commands::Report { calendar, from, to, timetable, attended, min, days } => {
            let mut settings = settings_repo.load()?;
            if let Some(min) = min {
                settings = settings.with_min_attendance(min)?;
            }

            let base = match timetable {
                Some(path) => load_timetable(&path)?,
                None => Timetable::new(),
            };
            let timetable = parse_timetable_args(&days, base)?;
            if timetable.is_empty() {
                return Err(anyhow!("No timetable given. Pass --timetable FILE or day:subjects entries."));
            }

            let today = Local::now().date_naive();
            let (first, last) = month_bounds(today);
            let start = from.map(|s| parse_date_arg(&s, today)).transpose()?.unwrap_or(first);
            let end = to.map(|s| parse_date_arg(&s, today)).transpose()?.unwrap_or(last);
            if start > end {
                println!("Warning: period start {} is after end {}", start, end);
            }

            let events = match calendar {
                Some(path) => parse_academic_calendar(&FileCalendarSource::new(path).read_text()),
                None => Vec::new(),
            };
            tracing::debug!(events = events.len(), "calendar parsed");
            let records = match attended {
                Some(path) => load_attendance(&path)?,
                None => assume_full_attendance(&timetable, start, end),
            };

            let monthly = calculate_monthly_attendance(&timetable, &events, start, end, &records);
            let summary = AttendanceSummary::new(monthly, settings.min_attendance);

            println!("Period: {} to {}", start.format("%Y-%m-%d"), end.format("%Y-%m-%d"));
            report::show_timetable(&timetable);
            report::show_summary(&summary);
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let settings = settings_repo.load()?;
                println!("Settings file: {}", settings_repo.path().display());
                println!("  Minimum attendance: {}%", settings.min_attendance);
            }
            ConfigAction::SetMin { percent } => {
                let settings = settings_repo.load()?.with_min_attendance(percent)?;
                settings_repo.save(&settings)?;
                println!("Minimum attendance set to {}%", settings.min_attendance);
            }
        },
    }
    Ok(())
}

fn load_timetable(path: &Path) -> Result<Timetable> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read timetable {}", path.display()))?;
    let named: HashMap<String, Vec<String>> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid timetable JSON in {}", path.display()))?;
    Ok(Timetable::from_named(named))
}

fn load_attendance(path: &Path) -> Result<AttendanceRecords> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read attendance records {}", path.display()))?;
    let records: AttendanceRecords = serde_json::from_str(&content)
        .with_context(|| format!("Invalid attendance JSON in {}", path.display()))?;
    Ok(records)
}
