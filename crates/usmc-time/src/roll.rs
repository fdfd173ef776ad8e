//! Rolling a date-time onto the next or previous open day.
//!
//! A roll first moves a fixed number of calendar days, then keeps stepping in
//! the same direction while the market is closed.  The result carries the
//! session-close time of day (18:00 by default) regardless of the input time.
//!
//! # Example
//! ```
//! use chrono::{Datelike, NaiveDate, Weekday};
//! use usmc_time::{roll_forward, ProductCategory};
//!
//! // Saturday, Christmas 2021
//! let start = NaiveDate::from_ymd_opt(2021, 12, 25).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let next = roll_forward(ProductCategory::Futures, start, 1).unwrap();
//! assert_eq!(next.weekday(), Weekday::Mon);
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use tracing::{debug, trace};
use usmc_core::ensure;
use usmc_core::errors::{Error, Result};

use crate::calendars::united_states::is_closed;
use crate::date::{add_days, at_hour, start_of_day};
use crate::product::ProductCategory;

/// Hour of day stamped on every rolled date-time.
pub const SESSION_CLOSE_HOUR: u32 = 18;

/// Largest run of consecutive closed days a roll will skip before failing.
pub const MAX_CLOSED_RUN: u32 = 30;

/// Parameters of a roll.
///
/// ```
/// use usmc_time::RollPolicy;
///
/// let policy = RollPolicy::default().with_session_close_hour(16);
/// assert_eq!(policy.session_close_hour(), 16);
/// assert_eq!(policy.max_closed_run(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RollPolicy {
    session_close_hour: u32,
    max_closed_run: u32,
}

impl Default for RollPolicy {
    fn default() -> Self {
        Self {
            session_close_hour: SESSION_CLOSE_HOUR,
            max_closed_run: MAX_CLOSED_RUN,
        }
    }
}

impl RollPolicy {
    /// Set the hour of day stamped on the result.
    pub fn with_session_close_hour(mut self, hour: u32) -> Self {
        self.session_close_hour = hour;
        self
    }

    /// Set the safety cap on consecutive closed days.
    pub fn with_max_closed_run(mut self, days: u32) -> Self {
        self.max_closed_run = days;
        self
    }

    /// Hour of day stamped on the result.
    pub fn session_close_hour(&self) -> u32 {
        self.session_close_hour
    }

    /// Safety cap on consecutive closed days.
    pub fn max_closed_run(&self) -> u32 {
        self.max_closed_run
    }

    /// Check the policy can produce a result at all.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.session_close_hour < 24,
            "session close hour must be in [0, 23], got {}",
            self.session_close_hour
        );
        ensure!(
            self.max_closed_run > 0,
            "max closed run must be positive"
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn step(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    /// Weekend day that is pushed one more step if a roll lands on it.
    fn weekend_edge(self) -> Weekday {
        match self {
            Direction::Forward => Weekday::Sun,
            Direction::Backward => Weekday::Sat,
        }
    }
}

fn roll(
    product: ProductCategory,
    start: NaiveDateTime,
    num_days: i64,
    direction: Direction,
    policy: &RollPolicy,
) -> Result<NaiveDateTime> {
    policy.validate()?;
    let offset = num_days
        .checked_mul(direction.step())
        .ok_or_else(|| Error::InvalidArgument(format!("day count {num_days} overflows")))?;

    let mut date = add_days(start.date(), offset)?;
    let mut skipped = 0u32;
    while is_closed(product, date) {
        if skipped == policy.max_closed_run {
            return Err(Error::RollLimitExceeded {
                start: start.to_string(),
                steps: skipped,
            });
        }
        trace!(%date, %product, "skipping closed day");
        date = add_days(date, direction.step())?;
        skipped += 1;
    }

    // Futures are open on ordinary Sundays; a business-day result never is.
    if date.weekday() == direction.weekend_edge() {
        date = add_days(date, direction.step())?;
    }

    if skipped > 0 {
        debug!(%start, %date, skipped, ?direction, %product, "rolled past closed days");
    }
    at_hour(date, policy.session_close_hour)
}

/// Move `num_days` calendar days forward from `start`, then on to the next
/// open day.
///
/// If the open day found is a Sunday (possible for futures) the result is
/// the following Monday.  The time of day is set to 18:00:00.
pub fn roll_forward(
    product: ProductCategory,
    start: NaiveDateTime,
    num_days: i64,
) -> Result<NaiveDateTime> {
    roll_forward_with(product, start, num_days, &RollPolicy::default())
}

/// Move `num_days` calendar days backward from `start`, then on to the
/// previous open day.
///
/// If the day found is a Saturday the result is the preceding Friday.  The
/// time of day is set to 18:00:00.
pub fn roll_backward(
    product: ProductCategory,
    start: NaiveDateTime,
    num_days: i64,
) -> Result<NaiveDateTime> {
    roll_backward_with(product, start, num_days, &RollPolicy::default())
}

/// [`roll_forward`] with an explicit [`RollPolicy`].
pub fn roll_forward_with(
    product: ProductCategory,
    start: NaiveDateTime,
    num_days: i64,
    policy: &RollPolicy,
) -> Result<NaiveDateTime> {
    roll(product, start, num_days, Direction::Forward, policy)
}

/// [`roll_backward`] with an explicit [`RollPolicy`].
pub fn roll_backward_with(
    product: ProductCategory,
    start: NaiveDateTime,
    num_days: i64,
    policy: &RollPolicy,
) -> Result<NaiveDateTime> {
    roll(product, start, num_days, Direction::Backward, policy)
}

/// Date-only [`roll_forward`], starting from the beginning of `date`.
pub fn roll_forward_date(
    product: ProductCategory,
    date: NaiveDate,
    num_days: i64,
) -> Result<NaiveDate> {
    roll_forward(product, start_of_day(date), num_days).map(|dt| dt.date())
}

/// Date-only [`roll_backward`], starting from the beginning of `date`.
pub fn roll_backward_date(
    product: ProductCategory,
    date: NaiveDate,
    num_days: i64,
) -> Result<NaiveDate> {
    roll_backward(product, start_of_day(date), num_days).map(|dt| dt.date())
}

/// The next open day strictly after `date`.
pub fn next_open_day(product: ProductCategory, date: NaiveDate) -> Result<NaiveDate> {
    roll_forward_date(product, date, 1)
}

/// The previous open day strictly before `date`.
pub fn previous_open_day(product: ProductCategory, date: NaiveDate) -> Result<NaiveDate> {
    roll_backward_date(product, date, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::ymd;
    use chrono::Timelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        ymd(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    const EQUITIES: ProductCategory = ProductCategory::Equities;
    const FUTURES: ProductCategory = ProductCategory::Futures;

    #[test]
    fn christmas_2021_futures() {
        let start = at(2021, 12, 25, 0, 0);
        let fwd = roll_forward(FUTURES, start, 1).unwrap();
        assert_eq!(fwd, at(2021, 12, 27, 18, 0));
        let bwd = roll_backward(FUTURES, start, 1).unwrap();
        assert_eq!(bwd, at(2021, 12, 23, 18, 0));
    }

    #[test]
    fn time_is_normalised_to_session_close() {
        let start = date(2024, 6, 11).and_hms_milli_opt(9, 31, 12, 345).unwrap();
        let rolled = roll_forward(EQUITIES, start, 1).unwrap();
        assert_eq!(rolled.date(), date(2024, 6, 12));
        assert_eq!(
            (rolled.hour(), rolled.minute(), rolled.second(), rolled.nanosecond()),
            (18, 0, 0, 0)
        );
    }

    #[test]
    fn forward_over_long_weekend() {
        // Friday before Labor Day 2023 → Tuesday
        assert_eq!(
            roll_forward_date(EQUITIES, date(2023, 9, 1), 1).unwrap(),
            date(2023, 9, 5)
        );
    }

    #[test]
    fn backward_over_sunday_new_year() {
        // 2023-01-01 Sunday is a holiday, Monday 2nd observed, Saturday 31st
        assert_eq!(
            roll_backward_date(FUTURES, date(2023, 1, 3), 1).unwrap(),
            date(2022, 12, 30)
        );
    }

    #[test]
    fn futures_sunday_holiday_is_skipped() {
        // Saturday 2022-12-24 → Sunday 25th (holiday) → Monday 26th (observed)
        assert_eq!(next_open_day(FUTURES, date(2022, 12, 24)).unwrap(), date(2022, 12, 27));
    }

    #[test]
    fn futures_backward_can_land_on_open_sunday() {
        // Only Saturdays are pushed back; an ordinary Sunday is open for futures
        assert_eq!(
            previous_open_day(FUTURES, date(2024, 6, 17)).unwrap(),
            date(2024, 6, 16)
        );
        assert_eq!(
            previous_open_day(EQUITIES, date(2024, 6, 17)).unwrap(),
            date(2024, 6, 14)
        );
    }

    #[test]
    fn multi_day_roll() {
        // Monday 2024-07-01 + 3 days = Thursday 4th (holiday) → Friday 5th
        assert_eq!(
            roll_forward_date(EQUITIES, date(2024, 7, 1), 3).unwrap(),
            date(2024, 7, 5)
        );
        // Zero days keeps an open day
        assert_eq!(
            roll_forward_date(EQUITIES, date(2024, 7, 1), 0).unwrap(),
            date(2024, 7, 1)
        );
    }

    #[test]
    fn negative_day_count_reverses_the_initial_move() {
        // Forward roll by -2 from Wednesday 2024-07-10 lands on Monday 8th
        assert_eq!(
            roll_forward_date(EQUITIES, date(2024, 7, 10), -2).unwrap(),
            date(2024, 7, 8)
        );
    }

    #[test]
    fn safety_cap_is_enforced() {
        let policy = RollPolicy::default().with_max_closed_run(1);
        // Christmas 2021: Sat 25 → Sun 26 closed for equities too
        let start = at(2021, 12, 24, 0, 0);
        let err = roll_forward_with(EQUITIES, start, 1, &policy).unwrap_err();
        assert_eq!(
            err,
            Error::RollLimitExceeded {
                start: start.to_string(),
                steps: 1
            }
        );
    }

    #[test]
    fn custom_session_close() {
        let policy = RollPolicy::default().with_session_close_hour(16);
        let rolled = roll_forward_with(EQUITIES, at(2024, 6, 11, 0, 0), 1, &policy).unwrap();
        assert_eq!(rolled, at(2024, 6, 12, 16, 0));
    }

    #[test]
    fn invalid_policy_is_rejected() {
        let policy = RollPolicy::default().with_session_close_hour(24);
        assert!(matches!(
            roll_forward_with(EQUITIES, at(2024, 6, 11, 0, 0), 1, &policy),
            Err(Error::Precondition(_))
        ));
        let policy = RollPolicy::default().with_max_closed_run(0);
        assert!(policy.validate().is_err());
    }

    #[test]
    fn overflow_is_reported() {
        let start = start_of_day(NaiveDate::MAX);
        assert!(matches!(
            roll_forward(EQUITIES, start, 1),
            Err(Error::Date(_))
        ));
        assert!(matches!(
            roll_backward(EQUITIES, start, i64::MIN),
            Err(Error::InvalidArgument(_))
        ));
    }
}
