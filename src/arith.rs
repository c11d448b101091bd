//! Calendar arithmetic.
//!
//! Every operation is written once as an in-place mutation on `DateTime`.
//! The public value methods copy, mutate and return; `MutableDateTime`
//! calls the same mutations directly on its wrapped value.

use crate::calendar;
use crate::consts::{
    DAYS_IN_COMMON_YEAR, DAYS_PER_WEEK, JANUARY, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE,
    MILLIS_PER_SECOND, MONTHS_PER_QUARTER, MONTHS_PER_YEAR,
};
use crate::{DateTime, Weekday};

impl DateTime {
    pub(crate) fn set_time_in_place(&mut self, hours: u32, minutes: u32, seconds: u32, millis: u32) {
        let total = u64::from(hours) * u64::from(MILLIS_PER_HOUR)
            + u64::from(minutes) * u64::from(MILLIS_PER_MINUTE)
            + u64::from(seconds) * u64::from(MILLIS_PER_SECOND)
            + u64::from(millis % MILLIS_PER_SECOND);
        self.time = (total % u64::from(MILLIS_PER_DAY)) as u32;
    }

    pub(crate) fn set_millis_since_midnight_in_place(&mut self, millis: u32) {
        self.time = millis % MILLIS_PER_DAY;
    }

    pub(crate) fn clear_time_in_place(&mut self) {
        self.time = 0;
    }

    /// Adds milliseconds, carrying whole days into the date.
    pub(crate) fn add_millis_in_place(&mut self, millis: i64) {
        let day = i64::from(MILLIS_PER_DAY);
        let extended = i64::from(self.time) + millis;
        self.time = extended.rem_euclid(day) as u32;
        let carry = extended.div_euclid(day);
        if carry != 0 {
            self.add_days_in_place(carry);
        }
    }

    /// Walks whole years until the day of year lands inside one.
    pub(crate) fn add_days_in_place(&mut self, days: i64) {
        let mut year = self.year;
        let mut day = i64::from(self.day_of_year) + days;
        loop {
            let length = i64::from(calendar::days_in_year(year));
            if day <= length {
                break;
            }
            day -= length;
            year += 1;
        }
        while day <= 0 {
            year -= 1;
            day += i64::from(calendar::days_in_year(year));
        }
        self.year = year;
        self.day_of_year = day as u16;
    }

    /// Moves by whole months, clamping the day to the target month's length.
    pub(crate) fn roll_months_in_place(&mut self, months: i64) {
        let (month, day) = self.month_day();
        let total = i64::from(month - 1) + months;
        let year = self.year + total.div_euclid(i64::from(MONTHS_PER_YEAR)) as i32;
        let month = (total.rem_euclid(i64::from(MONTHS_PER_YEAR)) + 1) as u8;
        let day = day.min(calendar::days_in_month(month, year));
        self.year = year;
        self.day_of_year = calendar::day_of_year(month, day, year);
    }

    /// Moves by whole years keeping month and day; February 29 becomes the 28th.
    pub(crate) fn add_years_in_place(&mut self, years: i32) {
        let (month, day) = self.month_day();
        let year = self.year + years;
        let day = day.min(calendar::days_in_month(month, year));
        self.year = year;
        self.day_of_year = calendar::day_of_year(month, day, year);
    }

    /// Moves by whole years keeping the day of year; day 366 becomes 365
    /// when the target year is common.
    pub(crate) fn roll_years_in_place(&mut self, years: i32) {
        self.year += years;
        if self.day_of_year > DAYS_IN_COMMON_YEAR && !calendar::is_leap_year(self.year) {
            self.day_of_year -= 1;
        }
    }

    pub(crate) fn roll_forward_to_in_place(&mut self, weekday: Weekday) {
        let delta = (i64::from(weekday.index()) - i64::from(self.day_of_week())).rem_euclid(i64::from(DAYS_PER_WEEK));
        if delta != 0 {
            self.add_days_in_place(delta);
        }
    }

    pub(crate) fn roll_back_to_in_place(&mut self, weekday: Weekday) {
        let delta = (i64::from(self.day_of_week()) - i64::from(weekday.index())).rem_euclid(i64::from(DAYS_PER_WEEK));
        if delta != 0 {
            self.add_days_in_place(-delta);
        }
    }

    /// Midnight on the next Monday.
    pub(crate) fn next_week_in_place(&mut self) {
        self.add_days_in_place(i64::from(DAYS_PER_WEEK) - i64::from(self.day_of_week()));
        self.time = 0;
    }

    /// Midnight on the first of the next month.
    pub(crate) fn next_month_in_place(&mut self) {
        *self = self.first_of_month();
        self.roll_months_in_place(1);
    }

    /// Midnight on the first day of the next quarter.
    pub(crate) fn next_quarter_in_place(&mut self) {
        let into_quarter = i64::from(self.month() - 1) % i64::from(MONTHS_PER_QUARTER);
        *self = self.first_of_month();
        self.roll_months_in_place(i64::from(MONTHS_PER_QUARTER) - into_quarter);
    }

    /// Midnight on January 1st of the next year.
    pub(crate) fn next_year_in_place(&mut self) {
        self.year += 1;
        self.day_of_year = calendar::first_day_of_month(JANUARY, self.year);
        self.time = 0;
    }
}

impl DateTime {
    /// Same date with the given time of day; overflow wraps within the day.
    #[must_use]
    pub fn with_time(mut self, hours: u32, minutes: u32, seconds: u32, millis: u32) -> Self {
        self.set_time_in_place(hours, minutes, seconds, millis);
        self
    }

    #[must_use]
    pub fn with_millis_since_midnight(mut self, millis: u32) -> Self {
        self.set_millis_since_midnight_in_place(millis);
        self
    }

    #[must_use]
    pub fn add_millis(mut self, millis: i64) -> Self {
        self.add_millis_in_place(millis);
        self
    }

    #[must_use]
    pub fn add_seconds(mut self, seconds: i64) -> Self {
        self.add_millis_in_place(seconds * i64::from(MILLIS_PER_SECOND));
        self
    }

    #[must_use]
    pub fn add_minutes(mut self, minutes: i64) -> Self {
        self.add_millis_in_place(minutes * i64::from(MILLIS_PER_MINUTE));
        self
    }

    #[must_use]
    pub fn add_hours(mut self, hours: i64) -> Self {
        self.add_millis_in_place(hours * i64::from(MILLIS_PER_HOUR));
        self
    }

    /// Adds calendar days, keeping the time of day.
    #[must_use]
    pub fn add_days(mut self, days: i32) -> Self {
        self.add_days_in_place(i64::from(days));
        self
    }

    #[must_use]
    pub fn add_weeks(mut self, weeks: i32) -> Self {
        self.add_days_in_place(i64::from(weeks) * i64::from(DAYS_PER_WEEK));
        self
    }

    /// Adds months, clamping the day to the target month's length.
    #[must_use]
    pub fn add_months(mut self, months: i32) -> Self {
        self.roll_months_in_place(i64::from(months));
        self
    }

    #[must_use]
    pub fn add_quarters(mut self, quarters: i32) -> Self {
        self.roll_months_in_place(i64::from(quarters) * i64::from(MONTHS_PER_QUARTER));
        self
    }

    /// Adds years, keeping month and day (February 29 clamps to the 28th).
    #[must_use]
    pub fn add_years(mut self, years: i32) -> Self {
        self.add_years_in_place(years);
        self
    }

    /// Adds years, keeping the day of year (day 366 clamps to 365).
    #[must_use]
    pub fn roll_years(mut self, years: i32) -> Self {
        self.roll_years_in_place(years);
        self
    }

    /// The given weekday on or after this date.
    #[must_use]
    pub fn roll_forward_to(mut self, weekday: Weekday) -> Self {
        self.roll_forward_to_in_place(weekday);
        self
    }

    /// The given weekday on or before this date.
    #[must_use]
    pub fn roll_back_to(mut self, weekday: Weekday) -> Self {
        self.roll_back_to_in_place(weekday);
        self
    }

    #[must_use]
    pub fn next_week(mut self) -> Self {
        self.next_week_in_place();
        self
    }

    #[must_use]
    pub fn next_month(mut self) -> Self {
        self.next_month_in_place();
        self
    }

    #[must_use]
    pub fn next_quarter(mut self) -> Self {
        self.next_quarter_in_place();
        self
    }

    #[must_use]
    pub fn next_year(mut self) -> Self {
        self.next_year_in_place();
        self
    }
}
