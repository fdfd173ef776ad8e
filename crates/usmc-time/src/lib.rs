//! # usmc-time
//!
//! US market holiday rules, closure checks, business-day rolling, and the
//! GLOBEX session-end marker.
//!
//! All functions are pure: nothing is cached and no global state is read,
//! so every item is safe to call from any thread.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// Calendar trait.
pub mod calendar;

/// Concrete calendar implementations.
pub mod calendars;

/// Date helpers over `chrono`.
pub mod date;

/// GLOBEX session-end marker.
pub mod globex;

/// Holiday rules, one function per named holiday.
pub mod holidays;

/// `ProductCategory` — equities or futures.
pub mod product;

/// Forward and backward rolling onto open days.
pub mod roll;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::Calendar;
pub use calendars::united_states::{is_closed, UsMarketCalendar};
pub use date::ToCalendarDate;
pub use globex::end_time_globex;
pub use holidays::{holiday_name, holidays_in_year, is_us_holiday, UsHoliday};
pub use product::ProductCategory;
pub use roll::{
    next_open_day, previous_open_day, roll_backward, roll_backward_date, roll_backward_with,
    roll_forward, roll_forward_date, roll_forward_with, RollPolicy,
};
