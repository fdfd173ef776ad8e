//! `Calendar` trait.
//!
//! A calendar knows which dates are open for trading and can adjust dates
//! according to a [`BusinessDayConvention`].

use chrono::{Datelike, NaiveDate};
use usmc_core::errors::Result;

use crate::business_day_convention::BusinessDayConvention;
use crate::date::{add_days, is_weekend_day};

/// A trading calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"US Market (Futures)"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is open for trading in this calendar.
    fn is_business_day(&self, date: NaiveDate) -> bool;

    /// Return `true` if `date` is closed (weekend or holiday).
    fn is_holiday(&self, date: NaiveDate) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` is a weekend according to this calendar.
    ///
    /// Most calendars consider Saturday and Sunday as weekends.
    fn is_weekend(&self, date: NaiveDate) -> bool {
        is_weekend_day(date.weekday())
    }

    /// Adjust `date` according to the given business-day convention.
    fn adjust(&self, date: NaiveDate, convention: BusinessDayConvention) -> Result<NaiveDate> {
        match convention {
            BusinessDayConvention::Unadjusted => Ok(date),
            BusinessDayConvention::Following => {
                let mut d = date;
                while self.is_holiday(d) {
                    d = add_days(d, 1)?;
                }
                Ok(d)
            }
            BusinessDayConvention::ModifiedFollowing => {
                let adjusted = self.adjust(date, BusinessDayConvention::Following)?;
                if adjusted.month() != date.month() {
                    self.adjust(date, BusinessDayConvention::Preceding)
                } else {
                    Ok(adjusted)
                }
            }
            BusinessDayConvention::Preceding => {
                let mut d = date;
                while self.is_holiday(d) {
                    d = add_days(d, -1)?;
                }
                Ok(d)
            }
            BusinessDayConvention::ModifiedPreceding => {
                let adjusted = self.adjust(date, BusinessDayConvention::Preceding)?;
                if adjusted.month() != date.month() {
                    self.adjust(date, BusinessDayConvention::Following)
                } else {
                    Ok(adjusted)
                }
            }
            BusinessDayConvention::Nearest => {
                if self.is_business_day(date) {
                    return Ok(date);
                }
                let fwd = self.adjust(date, BusinessDayConvention::Following)?;
                let bwd = self.adjust(date, BusinessDayConvention::Preceding)?;
                let days_fwd = (fwd - date).num_days();
                let days_bwd = (date - bwd).num_days();
                if days_fwd <= days_bwd {
                    Ok(fwd)
                } else {
                    Ok(bwd)
                }
            }
        }
    }

    /// Advance `date` by `n` open days (negative `n` moves backwards).
    fn advance_business_days(&self, mut date: NaiveDate, n: i32) -> Result<NaiveDate> {
        let step: i64 = if n >= 0 { 1 } else { -1 };
        let mut remaining = n.unsigned_abs();
        while remaining > 0 {
            date = add_days(date, step)?;
            if self.is_business_day(date) {
                remaining -= 1;
            }
        }
        Ok(date)
    }

    /// Count the number of open days between `d1` (exclusive) and `d2`
    /// (inclusive).  Returns a negative number if `d2 < d1`.
    fn business_days_between(&self, d1: NaiveDate, d2: NaiveDate) -> i64 {
        if d1 == d2 {
            return 0;
        }
        let sign = if d2 > d1 { 1 } else { -1 };
        let (start, end) = if d2 > d1 { (d1, d2) } else { (d2, d1) };
        let count = start
            .iter_days()
            .skip(1)
            .take_while(|d| *d <= end)
            .filter(|d| self.is_business_day(*d))
            .count();
        sign * count as i64
    }

    /// Closed days in the inclusive range `[from, to]`.
    ///
    /// With `include_weekends = false` only closures that are not weekends
    /// in this calendar are returned.
    fn holiday_list(&self, from: NaiveDate, to: NaiveDate, include_weekends: bool) -> Vec<NaiveDate> {
        from.iter_days()
            .take_while(|d| *d <= to)
            .filter(|d| self.is_holiday(*d) && (include_weekends || !self.is_weekend(*d)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::united_states::UsMarketCalendar;
    use crate::date::ymd;
    use crate::product::ProductCategory;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        ymd(y, m, d).unwrap()
    }

    const EQUITIES: UsMarketCalendar = UsMarketCalendar::new(ProductCategory::Equities);

    #[test]
    fn adjust_following() {
        // 2023-09-02 is a Saturday, Monday 4th is Labor Day
        let sat = date(2023, 9, 2);
        let adjusted = EQUITIES.adjust(sat, BusinessDayConvention::Following).unwrap();
        assert_eq!(adjusted, date(2023, 9, 5));
    }

    #[test]
    fn adjust_preceding() {
        let sat = date(2023, 9, 2);
        let adjusted = EQUITIES.adjust(sat, BusinessDayConvention::Preceding).unwrap();
        assert_eq!(adjusted, date(2023, 9, 1)); // Friday
    }

    #[test]
    fn adjust_modified_following_stays_in_month() {
        // 2024-03-30 Saturday, next open day is April 1 → falls back to
        // Thursday March 28 (Good Friday is the 29th)
        let sat = date(2024, 3, 30);
        let adjusted = EQUITIES
            .adjust(sat, BusinessDayConvention::ModifiedFollowing)
            .unwrap();
        assert_eq!(adjusted, date(2024, 3, 28));
    }

    #[test]
    fn adjust_nearest() {
        // Saturday 2023-06-17: Friday 16th and Tuesday 20th (Juneteenth
        // Monday) → Friday is nearer
        let sat = date(2023, 6, 17);
        assert_eq!(
            EQUITIES.adjust(sat, BusinessDayConvention::Nearest).unwrap(),
            date(2023, 6, 16)
        );
        // Sunday 2023-09-10: Monday 11th is one day away, Friday 8th two
        let sun = date(2023, 9, 10);
        assert_eq!(
            EQUITIES.adjust(sun, BusinessDayConvention::Nearest).unwrap(),
            date(2023, 9, 11)
        );
    }

    #[test]
    fn unadjusted_is_identity() {
        let d = date(2024, 12, 25);
        assert_eq!(EQUITIES.adjust(d, BusinessDayConvention::Unadjusted).unwrap(), d);
    }

    #[test]
    fn advance_business_days_skips_closures() {
        // Wednesday 2024-07-03 + 1 open day → Friday 5th (4th is a holiday)
        let d = date(2024, 7, 3);
        assert_eq!(EQUITIES.advance_business_days(d, 1).unwrap(), date(2024, 7, 5));
        assert_eq!(EQUITIES.advance_business_days(date(2024, 7, 5), -1).unwrap(), d);
    }

    #[test]
    fn business_days_between() {
        let d1 = date(2023, 9, 4); // Monday (Labor Day)
        let d2 = date(2023, 9, 8); // Friday
        // Tue, Wed, Thu, Fri = 4 open days (d1 exclusive)
        assert_eq!(EQUITIES.business_days_between(d1, d2), 4);
        assert_eq!(EQUITIES.business_days_between(d2, d1), -4);
        assert_eq!(EQUITIES.business_days_between(d1, d1), 0);
    }

    #[test]
    fn holiday_list_with_and_without_weekends() {
        let from = date(2024, 12, 23);
        let to = date(2024, 12, 29);
        assert_eq!(EQUITIES.holiday_list(from, to, false), vec![date(2024, 12, 25)]);
        assert_eq!(
            EQUITIES.holiday_list(from, to, true),
            vec![date(2024, 12, 25), date(2024, 12, 28), date(2024, 12, 29)]
        );
    }
}
