//! US market holiday rules.
//!
//! Every rule maps a year to the date of one named holiday and is recomputed
//! on each call.  Rules apply to every year, including years before the
//! holiday was established (Juneteenth in 1990 is still June 19).
//!
//! Rules:
//! * New Year's Day (Jan 1; observed: if Sun → Mon; if Sat → Fri)
//! * Martin Luther King Jr. Day (3rd Mon in Jan)
//! * Presidents' Day (3rd Mon in Feb)
//! * Good Friday (two days before Easter Sunday)
//! * Memorial Day (last Mon in May)
//! * Juneteenth (Jun 19; observed: if Sun → Mon; if Sat → Fri)
//! * Independence Day (Jul 4; observed: if Sun → Mon; if Sat → Fri)
//! * Labor Day (1st Mon in Sep)
//! * Thanksgiving Day (4th Thu in Nov)
//! * Christmas Day (Dec 25; observed: if Sun → Mon; if Sat → Fri)
//!
//! Observed dates are computed within the holiday's own year: a Saturday
//! January 1 is observed on December 31 of the previous year, which
//! [`is_us_holiday`] never matches because it only consults the rules of the
//! date's own year.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::warn;
use usmc_core::errors::{Error, Result};

use crate::date::{add_days, last_weekday, nth_weekday, ymd, ToCalendarDate};

/// First year for which the Gregorian Easter computation is guaranteed.
pub const EASTER_RELIABLE_FROM: i32 = 1584;

// ── Weekend adjustment ────────────────────────────────────────────────────────

/// Move a holiday falling on a weekend to the nearest weekday.
///
/// Saturday → preceding Friday, Sunday → following Monday, otherwise the
/// date is returned unchanged.
pub fn observed(date: NaiveDate) -> Result<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => add_days(date, -1),
        Weekday::Sun => add_days(date, 1),
        _ => Ok(date),
    }
}

// ── Fixed-date holidays ───────────────────────────────────────────────────────

/// New Year's Day, January 1.
pub fn new_years_day(year: i32) -> Result<NaiveDate> {
    ymd(year, 1, 1)
}

/// New Year's Day moved off the weekend.
pub fn new_years_day_observed(year: i32) -> Result<NaiveDate> {
    observed(new_years_day(year)?)
}

/// Juneteenth, June 19.
pub fn juneteenth(year: i32) -> Result<NaiveDate> {
    ymd(year, 6, 19)
}

/// Juneteenth moved off the weekend.
pub fn juneteenth_observed(year: i32) -> Result<NaiveDate> {
    observed(juneteenth(year)?)
}

/// Independence Day, July 4.
pub fn independence_day(year: i32) -> Result<NaiveDate> {
    ymd(year, 7, 4)
}

/// Independence Day moved off the weekend.
pub fn independence_day_observed(year: i32) -> Result<NaiveDate> {
    observed(independence_day(year)?)
}

/// Christmas Day, December 25.
pub fn christmas_day(year: i32) -> Result<NaiveDate> {
    ymd(year, 12, 25)
}

/// Christmas Day moved off the weekend.
pub fn christmas_day_observed(year: i32) -> Result<NaiveDate> {
    observed(christmas_day(year)?)
}

// ── Weekday-of-month holidays ─────────────────────────────────────────────────

/// Martin Luther King Jr. Day, third Monday of January.
pub fn martin_luther_king_day(year: i32) -> Result<NaiveDate> {
    nth_weekday(3, Weekday::Mon, year, 1)
}

/// Presidents' Day (Washington's Birthday), third Monday of February.
pub fn presidents_day(year: i32) -> Result<NaiveDate> {
    nth_weekday(3, Weekday::Mon, year, 2)
}

/// Memorial Day, last Monday of May.
pub fn memorial_day(year: i32) -> Result<NaiveDate> {
    last_weekday(Weekday::Mon, year, 5)
}

/// Labor Day, first Monday of September.
pub fn labor_day(year: i32) -> Result<NaiveDate> {
    nth_weekday(1, Weekday::Mon, year, 9)
}

/// Thanksgiving Day, fourth Thursday of November.
pub fn thanksgiving_day(year: i32) -> Result<NaiveDate> {
    nth_weekday(4, Weekday::Thu, year, 11)
}

/// The Friday after Thanksgiving.
///
/// An early-close session marker, not a closure; [`is_us_holiday`] ignores it.
pub fn day_after_thanksgiving(year: i32) -> Result<NaiveDate> {
    add_days(thanksgiving_day(year)?, 1)
}

// ── Easter-relative holidays ──────────────────────────────────────────────────

/// Easter Sunday in the Gregorian calendar.
///
/// Anonymous Gregorian algorithm with truncating integer division.  Years
/// before [`EASTER_RELIABLE_FROM`] still produce a date but log a warning.
pub fn easter_sunday(year: i32) -> Result<NaiveDate> {
    if year < EASTER_RELIABLE_FROM {
        warn!(
            year,
            "Easter calculation is only reliable from {EASTER_RELIABLE_FROM} onwards"
        );
    }

    // Widened so `y + y / 4` cannot overflow at the ends of the i32 range.
    let y = i64::from(year);
    let g = y % 19;
    let c = y / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    // When h / 28 == 0 the correction term vanishes; skipping it also keeps
    // 29 / (h + 1) from dividing by zero in years where h == -1.
    let i = if h / 28 == 0 {
        h
    } else {
        h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11))
    };

    let mut day = i - ((y + y / 4 + i + 2 - c + c / 4) % 7) + 28;
    let mut month = 3;
    if day > 31 {
        month += 1;
        day -= 31;
    }

    let day = u32::try_from(day)
        .map_err(|_| Error::Date(format!("Easter day {day} is invalid for year {year}")))?;
    ymd(year, month, day)
}

/// Good Friday, two days before Easter Sunday.
pub fn good_friday(year: i32) -> Result<NaiveDate> {
    add_days(easter_sunday(year)?, -2)
}

// ── Named rules ───────────────────────────────────────────────────────────────

/// The holiday rules that close US markets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UsHoliday {
    /// January 1.
    NewYearsDay,
    /// January 1 moved off the weekend.
    NewYearsDayObserved,
    /// Third Monday of January.
    MartinLutherKingDay,
    /// Third Monday of February.
    PresidentsDay,
    /// Two days before Easter Sunday.
    GoodFriday,
    /// Last Monday of May.
    MemorialDay,
    /// June 19.
    Juneteenth,
    /// June 19 moved off the weekend.
    JuneteenthObserved,
    /// July 4.
    IndependenceDay,
    /// July 4 moved off the weekend.
    IndependenceDayObserved,
    /// First Monday of September.
    LaborDay,
    /// Fourth Thursday of November.
    ThanksgivingDay,
    /// December 25.
    ChristmasDay,
    /// December 25 moved off the weekend.
    ChristmasDayObserved,
}

impl UsHoliday {
    /// Every closing rule, in calendar order of the unadjusted holiday.
    pub const ALL: [UsHoliday; 14] = [
        UsHoliday::NewYearsDay,
        UsHoliday::NewYearsDayObserved,
        UsHoliday::MartinLutherKingDay,
        UsHoliday::PresidentsDay,
        UsHoliday::GoodFriday,
        UsHoliday::MemorialDay,
        UsHoliday::Juneteenth,
        UsHoliday::JuneteenthObserved,
        UsHoliday::IndependenceDay,
        UsHoliday::IndependenceDayObserved,
        UsHoliday::LaborDay,
        UsHoliday::ThanksgivingDay,
        UsHoliday::ChristmasDay,
        UsHoliday::ChristmasDayObserved,
    ];

    /// The date this rule produces in `year`.
    pub fn date(self, year: i32) -> Result<NaiveDate> {
        match self {
            UsHoliday::NewYearsDay => new_years_day(year),
            UsHoliday::NewYearsDayObserved => new_years_day_observed(year),
            UsHoliday::MartinLutherKingDay => martin_luther_king_day(year),
            UsHoliday::PresidentsDay => presidents_day(year),
            UsHoliday::GoodFriday => good_friday(year),
            UsHoliday::MemorialDay => memorial_day(year),
            UsHoliday::Juneteenth => juneteenth(year),
            UsHoliday::JuneteenthObserved => juneteenth_observed(year),
            UsHoliday::IndependenceDay => independence_day(year),
            UsHoliday::IndependenceDayObserved => independence_day_observed(year),
            UsHoliday::LaborDay => labor_day(year),
            UsHoliday::ThanksgivingDay => thanksgiving_day(year),
            UsHoliday::ChristmasDay => christmas_day(year),
            UsHoliday::ChristmasDayObserved => christmas_day_observed(year),
        }
    }

    /// Return `true` for the weekend-adjusted variants.
    pub fn is_observed_variant(self) -> bool {
        matches!(
            self,
            UsHoliday::NewYearsDayObserved
                | UsHoliday::JuneteenthObserved
                | UsHoliday::IndependenceDayObserved
                | UsHoliday::ChristmasDayObserved
        )
    }
}

impl std::fmt::Display for UsHoliday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            UsHoliday::NewYearsDay => "New Year's Day",
            UsHoliday::NewYearsDayObserved => "New Year's Day (observed)",
            UsHoliday::MartinLutherKingDay => "Martin Luther King Jr. Day",
            UsHoliday::PresidentsDay => "Presidents' Day",
            UsHoliday::GoodFriday => "Good Friday",
            UsHoliday::MemorialDay => "Memorial Day",
            UsHoliday::Juneteenth => "Juneteenth",
            UsHoliday::JuneteenthObserved => "Juneteenth (observed)",
            UsHoliday::IndependenceDay => "Independence Day",
            UsHoliday::IndependenceDayObserved => "Independence Day (observed)",
            UsHoliday::LaborDay => "Labor Day",
            UsHoliday::ThanksgivingDay => "Thanksgiving Day",
            UsHoliday::ChristmasDay => "Christmas Day",
            UsHoliday::ChristmasDayObserved => "Christmas Day (observed)",
        };
        write!(f, "{name}")
    }
}

// ── Queries ───────────────────────────────────────────────────────────────────

/// The first rule in [`UsHoliday::ALL`] that lands on `date`, if any.
///
/// A rule whose date cannot be represented in `date`'s year never matches.
pub fn holiday_name(date: impl ToCalendarDate) -> Option<UsHoliday> {
    let date = date.calendar_date();
    UsHoliday::ALL
        .into_iter()
        .find(|rule| rule.date(date.year()).is_ok_and(|d| d == date))
}

/// Return `true` if `date` is a US market holiday.
///
/// Weekends are not holidays by themselves; see
/// [`is_closed`](crate::calendars::united_states::is_closed) for the full
/// closure check.
pub fn is_us_holiday(date: impl ToCalendarDate) -> bool {
    holiday_name(date).is_some()
}

/// Every rule's date in `year`, sorted by date.
///
/// A fixed-date holiday that falls on a weekday appears twice, once as itself
/// and once as its observed variant.
pub fn holidays_in_year(year: i32) -> Result<Vec<(UsHoliday, NaiveDate)>> {
    let mut holidays = UsHoliday::ALL
        .into_iter()
        .map(|rule| rule.date(year).map(|d| (rule, d)))
        .collect::<Result<Vec<_>>>()?;
    holidays.sort_by_key(|&(_, d)| d);
    Ok(holidays)
}
