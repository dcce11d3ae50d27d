use anyhow::{anyhow, Result};
use crate::model::timetable::Timetable;
use crate::time::{parse_weekday_str, DAY_NAMES};

#[derive(Debug, PartialEq)]
pub struct ParsedInput {
    pub entries: Vec<(String, String)>,
    pub rest: Vec<String>,
}

/// Splits `key:value` arguments from plain ones, keeping argument order.
pub fn parse_args(args: &[String]) -> ParsedInput {
    let mut entries = Vec::new();
    let mut rest = Vec::new();

    for arg in args {
        if let Some((key, value)) = arg.split_once(':') {
            if !key.is_empty() {
                entries.push((key.to_string(), value.to_string()));
                continue;
            }
        }
        rest.push(arg.clone());
    }

    ParsedInput { entries, rest }
}

pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    let key = key.to_lowercase();

    // 1. Exact match
    if candidates.contains(&key.as_str()) {
        return Ok(key);
    }

    // 2. Prefix match
    let matches: Vec<&str> = candidates
        .iter()
        .filter(|&&c| c.starts_with(&key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}

/// Comma-separated subject list as typed into a timetable field.
pub fn parse_subjects(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Builds a timetable from `day:Subject, Subject` arguments on top of `base`.
///
/// Day names may be shortened to any unambiguous prefix. A day given again
/// replaces the earlier entry for that day.
pub fn parse_timetable_args(args: &[String], base: Timetable) -> Result<Timetable> {
    let parsed = parse_args(args);
    if let Some(stray) = parsed.rest.first() {
        return Err(anyhow!("Expected day:subjects, got '{}'", stray));
    }

    let mut timetable = base;
    for (key, value) in parsed.entries {
        let day_name = expand_key(&key, &DAY_NAMES)?;
        let day = parse_weekday_str(&day_name)?;
        timetable.set_day(day, parse_subjects(&value));
    }
    Ok(timetable)
}
