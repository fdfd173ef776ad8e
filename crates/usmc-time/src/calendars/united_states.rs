//! United States market calendars for equities and futures.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use usmc_core::errors::Result;

use crate::calendar::Calendar;
use crate::date::ToCalendarDate;
use crate::holidays::is_us_holiday;
use crate::product::ProductCategory;
use crate::roll;

/// Return `true` if the market for `product` is closed on `date`.
///
/// * Saturday is always closed.
/// * Sunday is closed for equities; for futures only when it is a holiday.
/// * Any other day is closed iff it is a US holiday.
///
/// The time component of a [`NaiveDateTime`] is ignored.
pub fn is_closed(product: ProductCategory, date: impl ToCalendarDate) -> bool {
    let date = date.calendar_date();
    match date.weekday() {
        Weekday::Sat => true,
        Weekday::Sun if product.closed_on_sundays() => true,
        _ => is_us_holiday(date),
    }
}

/// United States — market calendar for one [`ProductCategory`].
///
/// Holidays are those of [`holidays`](crate::holidays); weekends are
/// Saturday, plus Sunday for equities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UsMarketCalendar {
    product: ProductCategory,
}

impl UsMarketCalendar {
    /// Calendar for `product`.
    pub const fn new(product: ProductCategory) -> Self {
        Self { product }
    }

    /// The product category this calendar answers for.
    pub fn product(&self) -> ProductCategory {
        self.product
    }

    /// See [`is_closed`].
    pub fn is_closed(&self, date: impl ToCalendarDate) -> bool {
        is_closed(self.product, date)
    }

    /// See [`roll::roll_forward`].
    pub fn roll_forward(&self, start: NaiveDateTime, num_days: i64) -> Result<NaiveDateTime> {
        roll::roll_forward(self.product, start, num_days)
    }

    /// See [`roll::roll_backward`].
    pub fn roll_backward(&self, start: NaiveDateTime, num_days: i64) -> Result<NaiveDateTime> {
        roll::roll_backward(self.product, start, num_days)
    }
}

impl Calendar for UsMarketCalendar {
    fn name(&self) -> &str {
        match self.product {
            ProductCategory::Equities => "US Market (Equities)",
            ProductCategory::Futures => "US Market (Futures)",
        }
    }

    fn is_business_day(&self, date: NaiveDate) -> bool {
        !is_closed(self.product, date)
    }

    fn is_weekend(&self, date: NaiveDate) -> bool {
        match date.weekday() {
            Weekday::Sat => true,
            Weekday::Sun => self.product.closed_on_sundays(),
            _ => false,
        }
    }
}
