//! Date helpers on top of `chrono`.
//!
//! chrono reports unrepresentable dates with `None`.  The helpers here turn
//! that into [`Error::Date`] so holiday rules and rolling code can propagate
//! failures with `?`.
//!
//! # Range
//! Any date chrono can represent is accepted; there is no library-specific
//! epoch or serial number.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use usmc_core::errors::{Error, Result};

/// Anything that carries a calendar date.
///
/// Lets closure checks accept a bare [`NaiveDate`] or a [`NaiveDateTime`]
/// (whose time-of-day is ignored).
pub trait ToCalendarDate {
    /// The calendar date, with any time component truncated.
    fn calendar_date(&self) -> NaiveDate;
}

impl ToCalendarDate for NaiveDate {
    fn calendar_date(&self) -> NaiveDate {
        *self
    }
}

impl ToCalendarDate for NaiveDateTime {
    fn calendar_date(&self) -> NaiveDate {
        self.date()
    }
}

impl<T: ToCalendarDate + ?Sized> ToCalendarDate for &T {
    fn calendar_date(&self) -> NaiveDate {
        (**self).calendar_date()
    }
}

// ── Constructors ──────────────────────────────────────────────────────────────

/// Create a date from year, month (1–12), and day-of-month (1–31).
pub fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        Error::Date(format!(
            "{year}-{month:02}-{day:02} is not a representable date"
        ))
    })
}

/// Return the *n*-th occurrence of `weekday` in `year`/`month`.
///
/// For example, `nth_weekday(3, Weekday::Mon, 2024, 1)` returns the third
/// Monday of January 2024 (2024-01-15).
///
/// # Errors
/// Returns an error if `n` is zero, if the month has fewer than `n` such
/// weekdays, or if the month itself cannot be represented.
pub fn nth_weekday(n: u8, weekday: Weekday, year: i32, month: u32) -> Result<NaiveDate> {
    if n == 0 {
        return Err(Error::Date("nth_weekday: n must be >= 1".into()));
    }
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, n).ok_or_else(|| {
        Error::Date(format!(
            "nth_weekday: {n}-th {weekday} does not exist in {year}-{month:02}"
        ))
    })
}

/// Return the last occurrence of `weekday` in `year`/`month`.
pub fn last_weekday(weekday: Weekday, year: i32, month: u32) -> Result<NaiveDate> {
    let last = end_of_month(year, month)?;
    let back = (7 + last.weekday().num_days_from_monday() - weekday.num_days_from_monday()) % 7;
    add_days(last, -i64::from(back))
}

/// Return the last calendar day of `year`/`month`.
pub fn end_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    (28..=31)
        .rev()
        .find_map(|d| NaiveDate::from_ymd_opt(year, month, d))
        .ok_or_else(|| Error::Date(format!("{year}-{month:02} is not a representable month")))
}

// ── Arithmetic ────────────────────────────────────────────────────────────────

/// Shift `date` by `n` calendar days (negative moves backwards).
pub fn add_days(date: NaiveDate, n: i64) -> Result<NaiveDate> {
    let shifted = if n >= 0 {
        date.checked_add_days(Days::new(n.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(n.unsigned_abs()))
    };
    shifted.ok_or_else(|| Error::Date(format!("{date} shifted by {n} days is out of range")))
}

// ── Time of day ───────────────────────────────────────────────────────────────

/// `date` at midnight.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// `date` at `hour`:00:00.000.
pub fn at_hour(date: NaiveDate, hour: u32) -> Result<NaiveDateTime> {
    date.and_hms_opt(hour, 0, 0)
        .ok_or_else(|| Error::Date(format!("hour {hour} out of range [0, 23]")))
}

/// Return `true` for Saturday and Sunday.
pub fn is_weekend_day(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_ymd_rejects_invalid() {
        assert!(ymd(2023, 2, 29).is_err());
        assert!(ymd(2024, 2, 29).is_ok());
        assert!(matches!(ymd(2023, 13, 1), Err(Error::Date(_))));
    }

    #[test]
    fn test_nth_weekday() {
        // 3rd Wednesday of March 2024 = March 20
        let d = nth_weekday(3, Weekday::Wed, 2024, 3).unwrap();
        assert_eq!(d, ymd(2024, 3, 20).unwrap());

        // 1st Monday of January 2024 = January 1
        let d2 = nth_weekday(1, Weekday::Mon, 2024, 1).unwrap();
        assert_eq!(d2, ymd(2024, 1, 1).unwrap());

        // 5th Monday of January 2024 = January 29
        let d3 = nth_weekday(5, Weekday::Mon, 2024, 1).unwrap();
        assert_eq!(d3, ymd(2024, 1, 29).unwrap());
    }

    #[test]
    fn test_nth_weekday_out_of_range() {
        // There is no 5th Wednesday in February 2024
        assert!(nth_weekday(5, Weekday::Wed, 2024, 2).is_err());
        assert!(nth_weekday(0, Weekday::Mon, 2024, 1).is_err());
    }

    #[test]
    fn test_last_weekday() {
        // May 2024 ends on a Friday; last Monday is the 27th
        assert_eq!(
            last_weekday(Weekday::Mon, 2024, 5).unwrap(),
            ymd(2024, 5, 27).unwrap()
        );
        // May 2021 ends on a Monday
        assert_eq!(
            last_weekday(Weekday::Mon, 2021, 5).unwrap(),
            ymd(2021, 5, 31).unwrap()
        );
    }

    #[test]
    fn test_end_of_month() {
        assert_eq!(end_of_month(2024, 2).unwrap().day(), 29); // leap year
        assert_eq!(end_of_month(2100, 2).unwrap().day(), 28); // non-leap century
        assert!(end_of_month(2024, 0).is_err());
    }

    #[test]
    fn test_add_days_both_directions() {
        let d = ymd(2023, 1, 1).unwrap();
        assert_eq!(add_days(d, 31).unwrap(), ymd(2023, 2, 1).unwrap());
        assert_eq!(add_days(d, -1).unwrap(), ymd(2022, 12, 31).unwrap());
        assert!(add_days(NaiveDate::MAX, 1).is_err());
    }

    #[test]
    fn test_time_of_day() {
        let d = ymd(2021, 12, 27).unwrap();
        assert_eq!(start_of_day(d).hour(), 0);
        assert_eq!(at_hour(d, 18).unwrap().hour(), 18);
        assert!(at_hour(d, 24).is_err());
    }

    #[test]
    fn test_calendar_date_truncates_time() {
        let dt = ymd(2024, 7, 4).unwrap().and_hms_opt(23, 59, 59).unwrap();
        assert_eq!(dt.calendar_date(), ymd(2024, 7, 4).unwrap());
        assert_eq!((&dt).calendar_date(), ymd(2024, 7, 4).unwrap());
    }
}
