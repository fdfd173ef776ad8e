//! GLOBEX electronic session end-of-day marker.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use usmc_core::errors::Result;

use crate::date::{add_days, at_hour};
use crate::holidays::{christmas_day, is_us_holiday};

/// Hour at which the GLOBEX session ends on a holiday.
pub const GLOBEX_EARLY_CLOSE_HOUR: u32 = 13;

/// End-of-session marker for the GLOBEX session recorded on `date`.
///
/// * Saturday has no session.
/// * The Friday immediately before Christmas Day has no session.
/// * A Sunday session belongs to the following Monday.
/// * Otherwise the marker is midnight of the session day, or
///   13:00 when that day is a US holiday (early close).
///
/// ```
/// use chrono::NaiveDate;
/// use usmc_time::end_time_globex;
///
/// let christmas = NaiveDate::from_ymd_opt(2021, 12, 25).unwrap(); // Saturday
/// assert_eq!(end_time_globex(christmas).unwrap(), None);
/// ```
pub fn end_time_globex(date: NaiveDate) -> Result<Option<NaiveDateTime>> {
    let christmas_eve = add_days(christmas_day(date.year())?, -1)?;
    let session_day = match date.weekday() {
        Weekday::Sat => return Ok(None),
        Weekday::Fri if date == christmas_eve => return Ok(None),
        Weekday::Sun => add_days(date, 1)?,
        _ => date,
    };

    let hour = if is_us_holiday(session_day) {
        GLOBEX_EARLY_CLOSE_HOUR
    } else {
        0
    };
    at_hour(session_day, hour).map(Some)
}
