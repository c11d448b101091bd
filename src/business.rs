//! Weekday and business-day traversal.
//!
//! Steppers land on midnight. A predicate that marks every weekday as a
//! holiday makes the business-day steppers loop forever.

use tracing::trace;

use crate::consts::DAYS_PER_WEEK;
use crate::iter::{BusinessDays, Sequence};
use crate::{DateTime, DateTimeRange, HolidayPredicate, Weekday};

/// Largest `nth` any weekday can occur within a single month.
const MAX_WEEKDAYS_IN_MONTH: i32 = 5;

impl DateTime {
    pub(crate) fn next_weekday_in_place(&mut self) {
        self.add_days_in_place(1);
        let dow = self.day_of_week();
        if dow > Weekday::Friday.index() {
            self.add_days_in_place(i64::from(DAYS_PER_WEEK) - i64::from(dow));
        }
        self.clear_time_in_place();
    }

    pub(crate) fn prior_weekday_in_place(&mut self) {
        self.add_days_in_place(-1);
        let dow = self.day_of_week();
        if dow > Weekday::Friday.index() {
            self.add_days_in_place(i64::from(Weekday::Friday.index()) - i64::from(dow));
        }
        self.clear_time_in_place();
    }

    pub(crate) fn next_business_day_in_place(&mut self, holidays: &dyn HolidayPredicate) {
        self.next_weekday_in_place();
        while holidays.is_holiday(self) {
            self.next_weekday_in_place();
        }
    }

    pub(crate) fn prior_business_day_in_place(&mut self, holidays: &dyn HolidayPredicate) {
        self.prior_weekday_in_place();
        while holidays.is_holiday(self) {
            self.prior_weekday_in_place();
        }
    }

    pub(crate) fn add_business_days_in_place(&mut self, days: i32, holidays: &dyn HolidayPredicate) {
        for _ in 0..days.unsigned_abs() {
            if days > 0 {
                self.next_business_day_in_place(holidays);
            } else {
                self.prior_business_day_in_place(holidays);
            }
        }
    }

    /// First business day on or after this date, at midnight.
    fn first_business_day_from(self, holidays: &dyn HolidayPredicate) -> Self {
        let midnight = self.at_midnight();
        if holidays.is_business_day(&midnight) {
            midnight
        } else {
            midnight.next_business_day(holidays)
        }
    }
}

impl DateTime {
    pub fn is_holiday(&self, holidays: &dyn HolidayPredicate) -> bool {
        holidays.is_holiday(self)
    }

    pub fn is_business_day(&self, holidays: &dyn HolidayPredicate) -> bool {
        holidays.is_business_day(self)
    }

    /// Next Monday-Friday date at midnight.
    #[must_use]
    pub fn next_weekday(mut self) -> Self {
        self.next_weekday_in_place();
        self
    }

    /// Previous Monday-Friday date at midnight.
    #[must_use]
    pub fn prior_weekday(mut self) -> Self {
        self.prior_weekday_in_place();
        self
    }

    #[must_use]
    pub fn next_business_day(mut self, holidays: &dyn HolidayPredicate) -> Self {
        self.next_business_day_in_place(holidays);
        self
    }

    #[must_use]
    pub fn prior_business_day(mut self, holidays: &dyn HolidayPredicate) -> Self {
        self.prior_business_day_in_place(holidays);
        self
    }

    /// Steps `days` business days forward (or back when negative). Zero is
    /// a no-op and keeps the time of day.
    #[must_use]
    pub fn add_business_days(mut self, days: i32, holidays: &dyn HolidayPredicate) -> Self {
        self.add_business_days_in_place(days, holidays);
        self
    }

    /// Number of business days in this month up to and including this date.
    pub fn business_day_of_month(&self, holidays: &dyn HolidayPredicate) -> u32 {
        let mut probe = self.at_midnight();
        let mut count = u32::from(holidays.is_business_day(&probe));
        loop {
            probe.prior_business_day_in_place(holidays);
            if !probe.same_month(self) {
                return count;
            }
            count += 1;
        }
    }

    /// The `nth` occurrence (from 1) of `weekday` in this month, at midnight.
    pub fn nth_weekday_of_month(&self, nth: i32, weekday: Weekday) -> Option<Self> {
        if !(1..=MAX_WEEKDAYS_IN_MONTH).contains(&nth) {
            trace!(nth, %weekday, "weekday occurrence out of range");
            return None;
        }
        let first = self.first_of_month();
        let candidate = first
            .roll_forward_to(weekday)
            .add_days((nth - 1) * DAYS_PER_WEEK);
        if candidate.same_month(&first) {
            Some(candidate)
        } else {
            trace!(nth, %weekday, year = self.year(), month = self.month(), "no such weekday in month");
            None
        }
    }

    /// The `nth` occurrence of `weekday` in this month that is not a
    /// holiday. Weekend days never qualify.
    pub fn nth_business_weekday_of_month(
        &self,
        nth: i32,
        weekday: Weekday,
        holidays: &dyn HolidayPredicate,
    ) -> Option<Self> {
        if weekday.is_weekend() || nth < 1 {
            trace!(nth, %weekday, "not a business weekday search");
            return None;
        }
        let first = self.first_of_month();
        let mut probe = first.roll_forward_to(weekday);
        let mut seen = 0;
        while probe.same_month(&first) {
            if !holidays.is_holiday(&probe) {
                seen += 1;
                if seen == nth {
                    return Some(probe);
                }
            }
            probe.add_days_in_place(i64::from(DAYS_PER_WEEK));
        }
        trace!(nth, %weekday, seen, "not enough business weekdays in month");
        None
    }

    /// The `nth` business day (from 1) of this month.
    pub fn nth_business_day_of_month(&self, nth: i32, holidays: &dyn HolidayPredicate) -> Option<Self> {
        if nth < 1 {
            return None;
        }
        let first = self.first_of_month();
        let mut probe = first.add_days(-1);
        for _ in 0..nth {
            probe.next_business_day_in_place(holidays);
            if !probe.same_month(&first) {
                trace!(nth, year = self.year(), month = self.month(), "not enough business days in month");
                return None;
            }
        }
        Some(probe)
    }

    /// The `nth` business day counting back from the end of this month;
    /// `nth = 1` is the last one.
    pub fn last_nth_business_day_of_month(&self, nth: i32, holidays: &dyn HolidayPredicate) -> Option<Self> {
        self.last_nth_business_day_of_month_before(nth, self.next_month(), holidays)
    }

    /// The `nth` business day of this month counting back from the day
    /// before `before`. Dates of `before` past the month end count back
    /// from the month end.
    pub fn last_nth_business_day_of_month_before(
        &self,
        nth: i32,
        before: Self,
        holidays: &dyn HolidayPredicate,
    ) -> Option<Self> {
        if nth < 1 {
            return None;
        }
        let first = self.first_of_month();
        let mut probe = before.at_midnight().min(first.next_month());
        for _ in 0..nth {
            probe.prior_business_day_in_place(holidays);
            if probe < first {
                trace!(nth, before = %before, "not enough business days before cutoff");
                return None;
            }
        }
        Some(probe)
    }

    /// The `nth` business day of this month counting back from the `ith`
    /// occurrence of `weekday`.
    pub fn last_nth_business_day_of_month_before_ith_weekday(
        &self,
        nth: i32,
        ith: i32,
        weekday: Weekday,
        holidays: &dyn HolidayPredicate,
    ) -> Option<Self> {
        let before = self.nth_weekday_of_month(ith, weekday)?;
        self.last_nth_business_day_of_month_before(nth, before, holidays)
    }

    /// Every business day of this month, in order.
    pub fn business_days_in_month<'h>(&self, holidays: &'h dyn HolidayPredicate) -> Sequence<BusinessDays<'h>> {
        let month = DateTimeRange::for_month(*self);
        Sequence::new(self.first_of_month().first_business_day_from(holidays), BusinessDays(holidays)).within(month)
    }

    /// Business days of this month that fall before the day of `before`.
    pub fn business_days_in_month_before<'h>(
        &self,
        before: Self,
        holidays: &'h dyn HolidayPredicate,
    ) -> Sequence<BusinessDays<'h>> {
        let first = self.first_of_month();
        let cutoff = before.at_midnight().min(first.next_month());
        Sequence::new(first.first_business_day_from(holidays), BusinessDays(holidays))
            .within(DateTimeRange::from_to(first, cutoff))
    }

    /// Business days from this date (inclusive) up to the day of `before`.
    pub fn business_days_before<'h>(&self, before: Self, holidays: &'h dyn HolidayPredicate) -> Sequence<BusinessDays<'h>> {
        let start = self.at_midnight();
        Sequence::new(start.first_business_day_from(holidays), BusinessDays(holidays))
            .within(DateTimeRange::from_to(start, before.at_midnight()))
    }
}
