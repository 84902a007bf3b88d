//! Display formatting shared by the CLI output and the study screen.

use std::borrow::Cow;
use std::env;
use std::path::Path;

use anyhow::{Result, bail};
use chrono::{DateTime, Datelike, NaiveTime, Utc};

/// Format elapsed seconds as a stopwatch clock, "MM:SS".
///
/// Minutes are not capped, an hour and five seconds reads "60:05".
pub fn format_clock(total_secs: u64) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Format a duration for prose, "45s", "1m 5s", "1h 5m".
///
/// Zero remainders are dropped ("2m", not "2m 0s") and second precision is
/// dropped once hours are involved.
pub fn format_duration_human(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        if minutes > 0 { format!("{hours}h {minutes}m") } else { format!("{hours}h") }
    } else if minutes > 0 {
        if seconds > 0 { format!("{minutes}m {seconds}s") } else { format!("{minutes}m") }
    } else {
        format!("{seconds}s")
    }
}

/// Format timestamp with tiered display:
/// - Relative for <7 days: "2h ago", "3d ago"
/// - Absolute beyond that: "Jan 15", "Dec 3, 2024"
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(*timestamp);

    if duration.num_days() < 7 {
        format_relative(duration.num_seconds())
    } else {
        format_absolute(timestamp, &now)
    }
}

fn format_relative(seconds: i64) -> String {
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d ago", days)
    } else if hours > 0 {
        format!("{}h ago", hours)
    } else if minutes > 0 {
        format!("{}m ago", minutes)
    } else {
        "just now".to_string()
    }
}

fn format_absolute(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    if timestamp.year() == now.year() {
        timestamp.format("%b %-d").to_string()
    } else {
        timestamp.format("%b %-d, %Y").to_string()
    }
}

/// Parse a time of day given as "HH:MM", seconds optional.
pub fn parse_time_of_day(input: &str) -> Result<NaiveTime> {
    let input = input.trim();
    for pattern in ["%H:%M", "%H:%M:%S"] {
        if let Ok(time) = NaiveTime::parse_from_str(input, pattern) {
            return Ok(time);
        }
    }
    bail!("invalid time '{input}', expected HH:MM")
}

/// Formats a path with ~ substitution for the home directory
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_format_clock_pads_both_fields() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(5), "00:05");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(600), "10:00");
    }

    #[test]
    fn test_format_clock_minutes_uncapped() {
        assert_eq!(format_clock(3605), "60:05");
        assert_eq!(format_clock(7205), "120:05");
    }

    #[test]
    fn test_format_duration_human_tiers() {
        assert_eq!(format_duration_human(0), "0s");
        assert_eq!(format_duration_human(45), "45s");
        assert_eq!(format_duration_human(59), "59s");
        assert_eq!(format_duration_human(60), "1m");
        assert_eq!(format_duration_human(65), "1m 5s");
        assert_eq!(format_duration_human(3600), "1h");
        assert_eq!(format_duration_human(3900), "1h 5m");
        assert_eq!(format_duration_human(3905), "1h 5m");
    }

    #[test]
    fn test_format_relative_just_now() {
        let timestamp = Utc::now() - Duration::seconds(30);
        assert_eq!(format_timestamp(&timestamp), "just now");
    }

    #[test]
    fn test_format_relative_minutes() {
        let timestamp = Utc::now() - Duration::minutes(45);
        assert_eq!(format_timestamp(&timestamp), "45m ago");
    }

    #[test]
    fn test_format_relative_hours() {
        let timestamp = Utc::now() - Duration::hours(3);
        assert_eq!(format_timestamp(&timestamp), "3h ago");
    }

    #[test]
    fn test_format_relative_days() {
        let timestamp = Utc::now() - Duration::days(5);
        assert_eq!(format_timestamp(&timestamp), "5d ago");
    }

    #[test]
    fn test_format_absolute_year_handling() {
        let now = Utc::now();

        let timestamp = now - Duration::days(30);
        let formatted = format_timestamp(&timestamp);
        if timestamp.year() == now.year() {
            assert!(!formatted.contains(&now.year().to_string()));
        } else {
            assert!(formatted.contains(&timestamp.year().to_string()));
        }

        let old = now - Duration::days(400);
        assert!(format_timestamp(&old).contains(&old.year().to_string()));
    }

    #[test]
    fn test_parse_time_of_day() {
        assert_eq!(parse_time_of_day("08:30").unwrap(), NaiveTime::from_hms_opt(8, 30, 0).unwrap());
        assert_eq!(
            parse_time_of_day("14:05:30").unwrap(),
            NaiveTime::from_hms_opt(14, 5, 30).unwrap()
        );
        assert_eq!(parse_time_of_day(" 9:15 ").unwrap(), NaiveTime::from_hms_opt(9, 15, 0).unwrap());
    }

    #[test]
    fn test_parse_time_of_day_rejects_garbage() {
        assert!(parse_time_of_day("").is_err());
        assert!(parse_time_of_day("noon").is_err());
        assert!(parse_time_of_day("25:00").is_err());
        assert!(parse_time_of_day("08:61").is_err());
    }

    #[test]
    fn test_format_path_with_tilde() {
        let path = PathBuf::from("/Users/testuser/Documents/project");
        let formatted = format_path_with_tilde_internal(&path, Some("/Users/testuser"));
        assert_eq!(formatted, "~/Documents/project");

        // Path not under home
        let path2 = PathBuf::from("/opt/local/bin");
        let formatted2 = format_path_with_tilde_internal(&path2, Some("/Users/testuser"));
        assert_eq!(formatted2, "/opt/local/bin");
    }
}
