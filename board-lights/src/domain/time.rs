//! Wall-clock time handling for departure boards.
//!
//! Darwin gives departure times as bare "HH:MM" strings with no date. A
//! board fetched at 23:50 can list trains leaving at 00:10, so every time of
//! day has to be pinned to the right calendar date relative to "now" before
//! any arithmetic is done on it.

use chrono::{Days, NaiveDateTime, NaiveTime};

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Parse a time of day in Darwin's "HH:MM" format.
///
/// # Examples
///
/// ```
/// use board_lights::domain::parse_hhmm;
///
/// assert!(parse_hhmm("00:00").is_ok());
/// assert!(parse_hhmm("23:59").is_ok());
///
/// assert!(parse_hhmm("1430").is_err());
/// assert!(parse_hhmm("14:3").is_err());
/// assert!(parse_hhmm("25:00").is_err());
/// assert!(parse_hhmm("On time").is_err());
/// ```
pub fn parse_hhmm(s: &str) -> Result<NaiveTime, TimeError> {
    if s.len() != 5 {
        return Err(TimeError::new("expected HH:MM format"));
    }

    let bytes = s.as_bytes();

    if bytes[2] != b':' {
        return Err(TimeError::new("expected colon at position 2"));
    }

    let hour =
        parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
    if hour > 23 {
        return Err(TimeError::new("hour must be 0-23"));
    }

    let minute =
        parse_two_digits(&bytes[3..5]).ok_or_else(|| TimeError::new("invalid minute digits"))?;
    if minute > 59 {
        return Err(TimeError::new("minute must be 0-59"));
    }

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| TimeError::new("invalid time"))
}

/// Pin a time of day to the first instant at or after `now` when it occurs.
///
/// The time is placed on `now`'s calendar date. If that is already in the
/// past, it is moved to the following day. The result is therefore never
/// earlier than `now` and always less than 24 hours after it.
///
/// # Examples
///
/// ```
/// use board_lights::domain::{next_occurrence, parse_hhmm};
/// use chrono::NaiveDate;
///
/// let now = NaiveDate::from_ymd_opt(2024, 3, 15)
///     .unwrap()
///     .and_hms_opt(23, 58, 0)
///     .unwrap();
///
/// let later_today = next_occurrence(parse_hhmm("23:59").unwrap(), now).unwrap();
/// assert_eq!(later_today.date(), now.date());
///
/// let after_midnight = next_occurrence(parse_hhmm("00:05").unwrap(), now).unwrap();
/// assert_eq!(after_midnight.date(), NaiveDate::from_ymd_opt(2024, 3, 16).unwrap());
/// ```
pub fn next_occurrence(time: NaiveTime, now: NaiveDateTime) -> Result<NaiveDateTime, TimeError> {
    let today = now.date().and_time(time);
    if today >= now {
        return Ok(today);
    }
    today
        .checked_add_days(Days::new(1))
        .ok_or_else(|| TimeError::new("date overflow"))
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hh, mm, ss)
            .unwrap()
    }

    #[test]
    fn parse_valid_times() {
        let t = parse_hhmm("00:00").unwrap();
        assert_eq!((t.hour(), t.minute()), (0, 0));

        let t = parse_hhmm("09:05").unwrap();
        assert_eq!((t.hour(), t.minute()), (9, 5));

        let t = parse_hhmm("23:59").unwrap();
        assert_eq!((t.hour(), t.minute()), (23, 59));
    }

    #[test]
    fn parse_rejects_status_strings() {
        assert!(parse_hhmm("On time").is_err());
        assert!(parse_hhmm("Delayed").is_err());
        assert!(parse_hhmm("Cancelled").is_err());
        assert!(parse_hhmm("").is_err());
        assert!(parse_hhmm("garbage").is_err());
    }

    #[test]
    fn parse_invalid_format() {
        assert!(parse_hhmm("1430").is_err());
        assert!(parse_hhmm("14:300").is_err());
        assert!(parse_hhmm("14-30").is_err());
        assert!(parse_hhmm("1a:30").is_err());
        assert!(parse_hhmm(" 9:30").is_err());
    }

    #[test]
    fn parse_invalid_values() {
        assert!(parse_hhmm("24:00").is_err());
        assert!(parse_hhmm("12:60").is_err());
    }

    #[test]
    fn error_display() {
        let err = parse_hhmm("24:00").unwrap_err();
        assert_eq!(err.to_string(), "invalid time: hour must be 0-23");
    }

    #[test]
    fn later_today_stays_today() {
        let now = at(2024, 3, 15, 9, 59, 0);
        let dt = next_occurrence(parse_hhmm("10:00").unwrap(), now).unwrap();
        assert_eq!(dt, at(2024, 3, 15, 10, 0, 0));
    }

    #[test]
    fn exactly_now_stays_today() {
        let now = at(2024, 3, 15, 10, 0, 0);
        let dt = next_occurrence(parse_hhmm("10:00").unwrap(), now).unwrap();
        assert_eq!(dt, now);
    }

    #[test]
    fn after_midnight_moves_to_tomorrow() {
        let now = at(2024, 3, 15, 23, 58, 0);
        let dt = next_occurrence(parse_hhmm("00:05").unwrap(), now).unwrap();
        assert_eq!(dt, at(2024, 3, 16, 0, 5, 0));
        assert_eq!((dt - now).num_minutes(), 7);
    }

    #[test]
    fn just_departed_moves_to_tomorrow() {
        // Seconds past the minute are enough to push the same minute to tomorrow.
        let now = at(2024, 3, 15, 10, 0, 30);
        let dt = next_occurrence(parse_hhmm("10:00").unwrap(), now).unwrap();
        assert_eq!(dt, at(2024, 3, 16, 10, 0, 0));
    }

    #[test]
    fn rolls_over_month_and_year() {
        let now = at(2024, 12, 31, 23, 50, 0);
        let dt = next_occurrence(parse_hhmm("00:10").unwrap(), now).unwrap();
        assert_eq!(dt, at(2025, 1, 1, 0, 10, 0));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use proptest::prelude::*;

    prop_compose! {
        fn valid_time()(hour in 0u32..24, minute in 0u32..60) -> String {
            format!("{:02}:{:02}", hour, minute)
        }
    }

    prop_compose! {
        fn valid_now()(
            year in 2000i32..2100,
            month in 1u32..=12,
            day in 1u32..=28,
            secs in 0u32..86_400,
        ) -> NaiveDateTime {
            NaiveDate::from_ymd_opt(year, month, day)
                .unwrap()
                .and_hms_opt(secs / 3600, (secs / 60) % 60, secs % 60)
                .unwrap()
        }
    }

    proptest! {
        /// Any valid HH:MM string parses and formats back unchanged
        #[test]
        fn parse_format_roundtrip(s in valid_time()) {
            let t = parse_hhmm(&s).unwrap();
            prop_assert_eq!(t.format("%H:%M").to_string(), s);
        }

        /// Invalid hour is rejected
        #[test]
        fn invalid_hour_rejected(hour in 24u32..100, minute in 0u32..60) {
            let s = format!("{:02}:{:02}", hour, minute);
            prop_assert!(parse_hhmm(&s).is_err());
        }

        /// The next occurrence is never before now and less than a day after it
        #[test]
        fn next_occurrence_within_a_day(s in valid_time(), now in valid_now()) {
            let dt = next_occurrence(parse_hhmm(&s).unwrap(), now).unwrap();
            prop_assert!(dt >= now);
            prop_assert!(dt - now < Duration::days(1));
        }

        /// The time of day is preserved by the date adjustment
        #[test]
        fn next_occurrence_keeps_time(s in valid_time(), now in valid_now()) {
            let t = parse_hhmm(&s).unwrap();
            prop_assert_eq!(next_occurrence(t, now).unwrap().time(), t);
        }
    }
}
