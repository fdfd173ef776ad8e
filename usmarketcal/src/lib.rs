//! # usmarketcal
//!
//! US equities and futures market calendar: holiday rules, closure checks,
//! and rolling onto open business days.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `usmc-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! usmarketcal = "0.1"
//! ```
//!
//! ```rust
//! use chrono::NaiveDate;
//! use usmarketcal::{is_closed, next_open_day, ProductCategory};
//!
//! let july_4th = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
//! assert!(is_closed(ProductCategory::Equities, july_4th));
//!
//! let next = next_open_day(ProductCategory::Equities, july_4th).unwrap();
//! assert_eq!(next, NaiveDate::from_ymd_opt(2024, 7, 5).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions.
pub use usmc_core as core;

/// Holiday rules, calendars, and rolling.
pub use usmc_time as time;

pub use usmc_core::{Error, Result};
pub use usmc_time::{
    end_time_globex, holiday_name, holidays_in_year, is_closed, is_us_holiday, next_open_day,
    previous_open_day, roll_backward, roll_backward_date, roll_backward_with, roll_forward,
    roll_forward_date, roll_forward_with, BusinessDayConvention, Calendar, ProductCategory,
    RollPolicy, ToCalendarDate, UsHoliday, UsMarketCalendar,
};
