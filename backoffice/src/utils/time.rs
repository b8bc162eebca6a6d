//! Time helpers for order timestamps
//!
//! Order times are local wall-clock `NaiveDateTime`s. The display format
//! is the twelve-hour clock used on the order table (`12:15 PM`).

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use shared::error::{AppError, AppResult};

const CLOCK_FORMAT: &str = "%I:%M %p";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Current local wall-clock time
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parse a twelve-hour clock time (`11:48 AM`) on `date`
pub fn parse_clock(date: NaiveDate, clock: &str) -> AppResult<NaiveDateTime> {
    NaiveTime::parse_from_str(clock.trim(), CLOCK_FORMAT)
        .map(|t| date.and_time(t))
        .map_err(|_| AppError::validation(format!("Invalid time format: {}", clock)))
}

/// `12:15 PM`
pub fn format_clock(at: NaiveDateTime) -> String {
    at.format(CLOCK_FORMAT).to_string()
}

/// `2025-04-23`, or `N/A` when absent
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// Whole minutes from `start` to `end`, clamped at zero
pub fn elapsed_minutes(start: NaiveDateTime, end: NaiveDateTime) -> u32 {
    let minutes = (end - start).num_minutes();
    u32::try_from(minutes.max(0)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 23).unwrap()
    }

    #[test]
    fn test_clock_round_trip() {
        let at = parse_clock(day(), "11:48 AM").unwrap();
        assert_eq!(format_clock(at), "11:48 AM");
        let at = parse_clock(day(), "12:05 PM").unwrap();
        assert_eq!(format_clock(at), "12:05 PM");
        assert!(parse_clock(day(), "25:00").is_err());
    }

    #[test]
    fn test_elapsed_minutes() {
        let start = parse_clock(day(), "11:48 AM").unwrap();
        let end = parse_clock(day(), "12:21 PM").unwrap();
        assert_eq!(elapsed_minutes(start, end), 33);
        // Clock behind start
        assert_eq!(elapsed_minutes(end, start), 0);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some(day())), "2025-04-23");
        assert_eq!(format_date(None), "N/A");
    }
}
