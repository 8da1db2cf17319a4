//! Time utilities

use std::sync::LazyLock;
use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, Utc};
use regex::Regex;

static MINUTES_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*min").expect("valid minutes pattern"));

static CLOCK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+):(\d+)(?::(\d+))?").expect("valid clock pattern"));

/// Get current UTC time
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Parse a standings cell time into whole minutes
///
/// Accepts "20 min" and clock forms "h:mm" / "h:mm:ss". Leftover seconds round
/// the value up by one minute.
pub fn parse_solve_time_minutes(raw: &str) -> Option<i32> {
    if let Some(caps) = MINUTES_PATTERN.captures(raw) {
        return caps[1].parse().ok();
    }

    let caps = CLOCK_PATTERN.captures(raw)?;
    let hours: i32 = caps[1].parse().ok()?;
    let minutes: i32 = caps[2].parse().ok()?;
    let seconds: i32 = caps
        .get(3)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);

    hours
        .checked_mul(60)?
        .checked_add(minutes)?
        .checked_add(i32::from(seconds > 0))
}

/// Whether a snapshot polled at `last_polled_at` is older than `interval`
///
/// A snapshot that was never polled always needs a refresh.
pub fn needs_refresh(
    last_polled_at: Option<DateTime<Utc>>,
    interval: StdDuration,
    now: DateTime<Utc>,
) -> bool {
    let Some(polled) = last_polled_at else {
        return true;
    };

    let window = Duration::from_std(interval).unwrap_or(Duration::MAX);
    now - polled > window
}

/// Format a score with one decimal place
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

/// Format a duration as a human-readable string
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.num_seconds();

    if total_seconds < 0 {
        return "0s".to_string();
    }

    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let mut parts = Vec::new();

    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!("{}s", seconds));
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_solve_time_minutes() {
        assert_eq!(parse_solve_time_minutes("20 min"), Some(20));
        assert_eq!(parse_solve_time_minutes("7MIN"), Some(7));
        assert_eq!(parse_solve_time_minutes("1:30"), Some(90));
        assert_eq!(parse_solve_time_minutes("2:45:30"), Some(166));
        assert_eq!(parse_solve_time_minutes("2:45:00"), Some(165));
        assert_eq!(parse_solve_time_minutes("-"), None);
        assert_eq!(parse_solve_time_minutes(""), None);
    }

    #[test]
    fn test_parse_solve_time_minutes_out_of_range() {
        assert_eq!(parse_solve_time_minutes("99999999:00"), None);
        assert_eq!(parse_solve_time_minutes("35791394:07"), Some(i32::MAX));
        assert_eq!(parse_solve_time_minutes("35791394:07:01"), None);
        assert_eq!(parse_solve_time_minutes("99999999999 min"), None);
    }

    #[test]
    fn test_needs_refresh() {
        let now = now_utc();
        let interval = StdDuration::from_secs(300);

        assert!(needs_refresh(None, interval, now));
        assert!(!needs_refresh(Some(now - Duration::seconds(60)), interval, now));
        assert!(!needs_refresh(Some(now - Duration::seconds(300)), interval, now));
        assert!(needs_refresh(Some(now - Duration::seconds(301)), interval, now));
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(1.5), "1.5");
        assert_eq!(format_score(3.0), "3.0");
        assert_eq!(format_score(0.0), "0.0");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::seconds(30)), "30s");
        assert_eq!(format_duration(Duration::seconds(90)), "1m 30s");
        assert_eq!(format_duration(Duration::seconds(3661)), "1h 1m 1s");
    }
}
