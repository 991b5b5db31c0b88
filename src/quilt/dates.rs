//! Date arguments as the CLI accepts them.

use chrono::{Local, NaiveDate};

use crate::error::{QuiltError, Result};

/// The calendar day right now, in local time. This is the one place a
/// timestamp is truncated to a day before it enters the journal.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses `today`, `yesterday`, `tomorrow`, or a `yyyy-mm-dd` date. Relative
/// specifiers resolve against the passed `today`, so callers (and tests)
/// control the clock.
pub fn parse_date_arg(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    match input {
        "today" => Ok(today),
        "yesterday" => today
            .pred_opt()
            .ok_or_else(|| QuiltError::InvalidDate(input.to_string())),
        "tomorrow" => today
            .succ_opt()
            .ok_or_else(|| QuiltError::InvalidDate(input.to_string())),
        other => NaiveDate::parse_from_str(other, "%Y-%m-%d")
            .map_err(|_| QuiltError::InvalidDate(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 4).unwrap()
    }

    #[test]
    fn test_relative_specifiers() {
        assert_eq!(parse_date_arg("today", anchor()).unwrap(), anchor());
        assert_eq!(
            parse_date_arg("yesterday", anchor()).unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 3).unwrap()
        );
        assert_eq!(
            parse_date_arg("tomorrow", anchor()).unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()
        );
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(
            parse_date_arg("2025-12-31", anchor()).unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_invalid_dates_fail() {
        assert!(matches!(
            parse_date_arg("not-a-date", anchor()),
            Err(QuiltError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_date_arg("2026-02-30", anchor()),
            Err(QuiltError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_date_arg("04/08/2026", anchor()),
            Err(QuiltError::InvalidDate(_))
        ));
    }
}
