//! In-place cursor over a [`DateTime`].

use std::fmt;

use crate::holidays::DEFAULT_HOLIDAYS;
use crate::iter::{BusinessDays, Sequence};
use crate::prelude::*;
use crate::{DateTime, HolidayPredicate, Weekday};

/// A date-time that is stepped in place, carrying its holiday predicate.
///
/// Mutators return `&mut Self` so steps chain:
///
/// ```
/// use packed_datetime::{DateTime, MutableDateTime};
///
/// let mut cursor = MutableDateTime::new(DateTime::from_ymd(2012, 11, 21));
/// cursor.next_business_day().add_hours(9);
/// assert_eq!(cursor.to_string(), "20121123.090000000");
/// ```
///
/// Read-only queries come from the wrapped value through `Deref`.
#[derive(Debug, Clone, Copy, Deref)]
pub struct MutableDateTime<'h> {
    #[deref]
    value:    DateTime,
    holidays: &'h dyn HolidayPredicate,
}

impl MutableDateTime<'static> {
    /// Cursor using the default US holiday rule.
    ///
    /// Shorthand for `Settings::default().cursor(value)` without holding a
    /// `Settings`; callers with configured holidays should go through
    /// [`Settings::cursor`](crate::Settings::cursor) or
    /// [`MutableDateTime::with_holidays`].
    pub fn new(value: DateTime) -> Self {
        Self {
            value,
            holidays: &DEFAULT_HOLIDAYS,
        }
    }
}

impl<'h> MutableDateTime<'h> {
    pub fn with_holidays(value: DateTime, holidays: &'h dyn HolidayPredicate) -> Self {
        Self { value, holidays }
    }

    /// Snapshot of the current position.
    pub const fn value(&self) -> DateTime {
        self.value
    }

    pub fn holidays(&self) -> &'h dyn HolidayPredicate {
        self.holidays
    }

    /// Swaps the holiday predicate, returning the previous one.
    pub fn set_holidays(&mut self, holidays: &'h dyn HolidayPredicate) -> &'h dyn HolidayPredicate {
        std::mem::replace(&mut self.holidays, holidays)
    }

    /// Moves to `value`, keeping the predicate.
    pub fn set(&mut self, value: DateTime) -> &mut Self {
        self.value = value;
        self
    }

    pub fn set_rep(&mut self, rep: i64) -> &mut Self {
        self.value = DateTime::from_rep(rep);
        self
    }

    pub fn set_int_rep(&mut self, rep: i32) -> &mut Self {
        self.value = DateTime::from_int_rep(rep);
        self
    }

    pub fn set_time(&mut self, hours: u32, minutes: u32, seconds: u32, millis: u32) -> &mut Self {
        self.value.set_time_in_place(hours, minutes, seconds, millis);
        self
    }

    pub fn set_millis_since_midnight(&mut self, millis: u32) -> &mut Self {
        self.value.set_millis_since_midnight_in_place(millis);
        self
    }

    pub fn add_millis(&mut self, millis: i64) -> &mut Self {
        self.value.add_millis_in_place(millis);
        self
    }

    pub fn add_seconds(&mut self, seconds: i64) -> &mut Self {
        self.value.add_millis_in_place(seconds * i64::from(crate::MILLIS_PER_SECOND));
        self
    }

    pub fn add_minutes(&mut self, minutes: i64) -> &mut Self {
        self.value.add_millis_in_place(minutes * i64::from(crate::MILLIS_PER_MINUTE));
        self
    }

    pub fn add_hours(&mut self, hours: i64) -> &mut Self {
        self.value.add_millis_in_place(hours * i64::from(crate::MILLIS_PER_HOUR));
        self
    }

    pub fn add_days(&mut self, days: i32) -> &mut Self {
        self.value.add_days_in_place(i64::from(days));
        self
    }

    pub fn add_weeks(&mut self, weeks: i32) -> &mut Self {
        self.value.add_days_in_place(i64::from(weeks) * i64::from(crate::DAYS_PER_WEEK));
        self
    }

    /// Same as [`MutableDateTime::roll_months`].
    pub fn add_months(&mut self, months: i32) -> &mut Self {
        self.roll_months(months)
    }

    pub fn add_quarters(&mut self, quarters: i32) -> &mut Self {
        self.roll_months(quarters * crate::MONTHS_PER_QUARTER)
    }

    /// Moves by whole months, clamping the day to the target month's length.
    pub fn roll_months(&mut self, months: i32) -> &mut Self {
        self.value.roll_months_in_place(i64::from(months));
        self
    }

    pub fn add_years(&mut self, years: i32) -> &mut Self {
        self.value.add_years_in_place(years);
        self
    }

    pub fn roll_years(&mut self, years: i32) -> &mut Self {
        self.value.roll_years_in_place(years);
        self
    }

    pub fn roll_to_day_of_week(&mut self, weekday: Weekday) -> &mut Self {
        self.value.roll_forward_to_in_place(weekday);
        self
    }

    pub fn rollback_to_day_of_week(&mut self, weekday: Weekday) -> &mut Self {
        self.value.roll_back_to_in_place(weekday);
        self
    }

    pub fn next_week(&mut self) -> &mut Self {
        self.value.next_week_in_place();
        self
    }

    pub fn next_month(&mut self) -> &mut Self {
        self.value.next_month_in_place();
        self
    }

    pub fn next_quarter(&mut self) -> &mut Self {
        self.value.next_quarter_in_place();
        self
    }

    pub fn next_year(&mut self) -> &mut Self {
        self.value.next_year_in_place();
        self
    }

    pub fn next_weekday(&mut self) -> &mut Self {
        self.value.next_weekday_in_place();
        self
    }

    pub fn prior_weekday(&mut self) -> &mut Self {
        self.value.prior_weekday_in_place();
        self
    }

    pub fn next_business_day(&mut self) -> &mut Self {
        self.value.next_business_day_in_place(self.holidays);
        self
    }

    pub fn prior_business_day(&mut self) -> &mut Self {
        self.value.prior_business_day_in_place(self.holidays);
        self
    }

    pub fn add_business_days(&mut self, days: i32) -> &mut Self {
        self.value.add_business_days_in_place(days, self.holidays);
        self
    }

    pub fn is_holiday(&self) -> bool {
        self.holidays.is_holiday(&self.value)
    }

    pub fn is_business_day(&self) -> bool {
        self.holidays.is_business_day(&self.value)
    }

    pub fn business_day_of_month(&self) -> u32 {
        self.value.business_day_of_month(self.holidays)
    }

    pub fn nth_business_weekday_of_month(&self, nth: i32, weekday: Weekday) -> Option<DateTime> {
        self.value.nth_business_weekday_of_month(nth, weekday, self.holidays)
    }

    pub fn nth_business_day_of_month(&self, nth: i32) -> Option<DateTime> {
        self.value.nth_business_day_of_month(nth, self.holidays)
    }

    pub fn last_nth_business_day_of_month(&self, nth: i32) -> Option<DateTime> {
        self.value.last_nth_business_day_of_month(nth, self.holidays)
    }

    pub fn last_nth_business_day_of_month_before(&self, nth: i32, before: DateTime) -> Option<DateTime> {
        self.value.last_nth_business_day_of_month_before(nth, before, self.holidays)
    }

    pub fn last_nth_business_day_of_month_before_ith_weekday(
        &self,
        nth: i32,
        ith: i32,
        weekday: Weekday,
    ) -> Option<DateTime> {
        self.value
            .last_nth_business_day_of_month_before_ith_weekday(nth, ith, weekday, self.holidays)
    }

    pub fn business_days_in_month(&self) -> Sequence<BusinessDays<'h>> {
        self.value.business_days_in_month(self.holidays)
    }

    pub fn business_days_in_month_before(&self, before: DateTime) -> Sequence<BusinessDays<'h>> {
        self.value.business_days_in_month_before(before, self.holidays)
    }

    pub fn business_days_before(&self, before: DateTime) -> Sequence<BusinessDays<'h>> {
        self.value.business_days_before(before, self.holidays)
    }
}

impl PartialEq for MutableDateTime<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialEq<DateTime> for MutableDateTime<'_> {
    fn eq(&self, other: &DateTime) -> bool {
        self.value == *other
    }
}

impl From<DateTime> for MutableDateTime<'static> {
    fn from(value: DateTime) -> Self {
        Self::new(value)
    }
}

impl From<MutableDateTime<'_>> for DateTime {
    fn from(cursor: MutableDateTime<'_>) -> Self {
        cursor.value
    }
}

impl fmt::Display for MutableDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holidays::{BespokeHolidays, NoHolidays};
    use crate::test_utils::{ymd, ymd_hms};

    #[test]
    fn test_chained_steps() {
        let mut cursor = MutableDateTime::new(ymd(2003, 4, 5));
        cursor.add_days(1);
        assert_eq!(cursor.month(), 4);
        assert_eq!(cursor.day(), 6);

        cursor.add_months(1).add_hours(25).add_minutes(-30);
        assert_eq!(cursor, ymd_hms(2003, 5, 7, 0, 30, 0, 0));
    }

    #[test]
    fn test_matches_snapshot_arithmetic() {
        let start = ymd_hms(2012, 1, 31, 12, 0, 0, 0);
        let mut cursor = MutableDateTime::new(start);

        cursor.add_months(1);
        assert_eq!(cursor.value(), start.add_months(1));

        cursor.add_years(1);
        assert_eq!(cursor.value(), start.add_months(1).add_years(1));

        cursor.set(ymd(2012, 2, 29)).roll_years(1);
        assert_eq!(cursor.value(), ymd(2012, 2, 29).roll_years(1));

        cursor.set(start).roll_to_day_of_week(Weekday::Sunday);
        assert_eq!(cursor.value(), start.roll_forward_to(Weekday::Sunday));
        cursor.rollback_to_day_of_week(Weekday::Monday);
        assert_eq!(cursor.weekday(), Weekday::Monday);
    }

    #[test]
    fn test_default_holidays_are_us() {
        let mut cursor = MutableDateTime::new(ymd(2012, 11, 21));
        cursor.next_business_day();
        assert_eq!(cursor, ymd(2012, 11, 23));
        assert!(!cursor.is_holiday());
        assert!(cursor.is_business_day());
    }

    #[test]
    fn test_new_matches_default_settings() {
        let settings = crate::Settings::default();
        for start in [ymd(2012, 11, 21), ymd(2012, 12, 24), ymd(2013, 7, 3), ymd(2024, 11, 27)] {
            let mut plain = MutableDateTime::new(start);
            let mut configured = settings.cursor(start);
            plain.next_business_day();
            configured.next_business_day();
            assert_eq!(plain, configured, "{start}");
            assert_eq!(plain.is_holiday(), configured.is_holiday(), "{start}");
        }
    }

    #[test]
    fn test_custom_holidays() {
        let bespoke: BespokeHolidays = [ymd(2012, 3, 14)].into_iter().collect();
        let mut cursor = MutableDateTime::with_holidays(ymd(2012, 3, 13), &bespoke);
        cursor.next_business_day();
        assert_eq!(cursor, ymd(2012, 3, 15));

        let previous = cursor.set_holidays(&NoHolidays);
        assert!(previous.is_holiday(&ymd(2012, 3, 14)));
        cursor.prior_business_day();
        assert_eq!(cursor, ymd(2012, 3, 14));
    }

    #[test]
    fn test_business_queries_use_own_predicate() {
        let cursor = MutableDateTime::new(ymd(2012, 11, 15));
        assert_eq!(cursor.nth_business_weekday_of_month(4, Weekday::Thursday), Some(ymd(2012, 11, 29)));
        assert_eq!(cursor.nth_business_day_of_month(3), Some(ymd(2012, 11, 5)));
        assert_eq!(cursor.last_nth_business_day_of_month(1), Some(ymd(2012, 11, 30)));
        assert_eq!(
            cursor.last_nth_business_day_of_month_before(1, ymd(2012, 11, 22)),
            Some(ymd(2012, 11, 21))
        );
        assert_eq!(
            cursor.last_nth_business_day_of_month_before_ith_weekday(2, 4, Weekday::Thursday),
            Some(ymd(2012, 11, 20))
        );
        assert_eq!(cursor.business_day_of_month(), 11);
        assert_eq!(cursor.business_days_in_month().into_iter().count(), 21);
        assert_eq!(cursor.business_days_in_month_before(ymd(2012, 11, 8)).into_iter().count(), 5);
        assert_eq!(cursor.business_days_before(ymd(2012, 11, 19)).into_iter().count(), 2);
    }

    #[test]
    fn test_weekday_and_period_steps() {
        let mut cursor = MutableDateTime::new(ymd_hms(2012, 11, 16, 15, 0, 0, 0));
        cursor.next_weekday();
        assert_eq!(cursor, ymd(2012, 11, 19));
        cursor.prior_weekday();
        assert_eq!(cursor, ymd(2012, 11, 16));
        cursor.add_business_days(5);
        assert_eq!(cursor, ymd(2012, 11, 26));

        cursor.next_week();
        assert_eq!(cursor, ymd(2012, 12, 3));
        cursor.next_month();
        assert_eq!(cursor, ymd(2013, 1, 1));
        cursor.next_quarter();
        assert_eq!(cursor, ymd(2013, 4, 1));
        cursor.next_year();
        assert_eq!(cursor, ymd(2014, 1, 1));
        cursor.add_quarters(-1).add_weeks(1);
        assert_eq!(cursor, ymd(2013, 10, 8));
    }

    #[test]
    fn test_raw_setters() {
        let value = ymd_hms(1999, 12, 31, 23, 0, 0, 0);
        let mut cursor = MutableDateTime::new(ymd(2000, 1, 1));
        cursor.set_rep(value.rep());
        assert_eq!(cursor, value);
        cursor.set_int_rep(value.int_rep());
        assert_eq!(cursor, value.at_midnight());
        cursor.set_time(6, 30, 0, 0).add_seconds(30).add_millis(5);
        assert_eq!(cursor.millis_since_midnight(), 23_430_005);
        cursor.set_millis_since_midnight(0);
        assert_eq!(cursor.hours(), 0);
    }

    #[test]
    fn test_conversions_and_display() {
        let cursor: MutableDateTime<'_> = ymd(2012, 2, 29).into();
        assert_eq!(cursor.to_string(), "20120229.000000000");
        let value: DateTime = cursor.into();
        assert_eq!(value, ymd(2012, 2, 29));
    }
}
