//! Gregorian date/time values packed into plain integers.
//!
//! A [`DateTime`] is a `(year, day_of_year, time_of_day)` triple that packs
//! losslessly into an `i64` (or an `i32` for the date alone). Packed values
//! compare exactly like the values they encode, so time series can store
//! and filter raw integers and only rebuild a value when they need calendar
//! arithmetic.
//!
//! Two surfaces share one arithmetic engine:
//! - [`DateTime`] is `Copy`; every operation returns a new value.
//! - [`MutableDateTime`] is a cursor that mutates in place, for tight loops.
//!
//! Business-day logic is driven by a pluggable [`HolidayPredicate`]; default
//! collaborators (holidays, text format, name tables) live in [`Settings`].

mod arith;
mod bridge;
mod business;
pub mod calendar;
pub mod codec;
mod consts;
mod cursor;
mod format;
mod holidays;
mod iter;
mod names;
mod prelude;
mod range;
mod settings;
mod types;

pub use bridge::DateTimeParts;
pub use consts::*;
pub use cursor::MutableDateTime;
pub use format::{CompactFormat, DateTimeFormat, IsoFormat};
pub use holidays::{BespokeHolidays, FnHolidays, HolidayPredicate, JointHolidays, NoHolidays, UsHolidays};
pub use iter::{BusinessDays, DateTimeIter, Incrementer, Sequence, Step};
pub use names::{DayMonthNames, NameTable, ENGLISH, SPANISH};
pub use range::{DateTimeRange, RangeError};
pub use settings::{Config, HolidayRule, Language, Settings, TextFormat};
pub use types::{InvalidWeekday, Weekday};

use std::fmt;
use std::str::FromStr;

/// A Gregorian date with millisecond time of day.
///
/// Invariants: `day_of_year` is in `1..=days_in_year(year)` and
/// `time_of_day` is below [`MILLIS_PER_DAY`]. Field order makes the derived
/// ordering lexicographic over `(year, day_of_year, time_of_day)`, which is
/// also the ordering of [`DateTime::rep`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    year:        i32,
    day_of_year: u16,
    time:        u32,
}

/// Error type for parsing and strict construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Empty date string")]
    EmptyInput,
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(u32),
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u32 },
    #[error("Invalid time {hours:02}:{minutes:02}:{seconds:02}.{millis:03}")]
    InvalidTime {
        hours:   u32,
        minutes: u32,
        seconds: u32,
        millis:  u32,
    },
    #[error("Year {0} outside packable range ({min}..={max})", min = MIN_YEAR, max = MAX_YEAR)]
    YearOutOfRange(i64),
}

impl DateTime {
    /// Midnight on `day_of_year` of `year`.
    ///
    /// Out-of-range days wrap into neighbouring years, so day 0 is the last
    /// day of the previous year and day 367 of a common year is January 2
    /// of the next.
    ///
    /// The resulting year is not checked; it must stay within
    /// [`MIN_YEAR`]`..=`[`MAX_YEAR`] for [`DateTime::rep`] to be meaningful.
    pub fn from_year_day(year: i32, day_of_year: i32) -> Self {
        let mut value = Self {
            year,
            day_of_year: 1,
            time: 0,
        };
        value.add_days_in_place(i64::from(day_of_year) - 1);
        value
    }

    /// Midnight on the given calendar date.
    ///
    /// Lenient: the month is clamped to `1..=12` and the day to the length
    /// of that month, so `(1921, 8, 365)` is August 31. The year is taken
    /// as given and must lie in [`MIN_YEAR`]`..=`[`MAX_YEAR`] to pack; use
    /// [`DateTime::try_from_ymd`] to have it checked.
    pub fn from_ymd(year: i32, month: i32, day: i32) -> Self {
        let month = month.clamp(i32::from(JANUARY), i32::from(DECEMBER)) as u8;
        let day = day.clamp(1, i32::from(calendar::days_in_month(month, year))) as u8;
        Self {
            year,
            day_of_year: calendar::day_of_year(month, day, year),
            time: 0,
        }
    }

    /// Calendar date and time of day, clamping the date like [`DateTime::from_ymd`].
    pub fn from_ymd_hms_milli(
        year: i32,
        month: i32,
        day: i32,
        hours: u32,
        minutes: u32,
        seconds: u32,
        millis: u32,
    ) -> Self {
        let mut value = Self::from_ymd(year, month, day);
        value.set_time_in_place(hours, minutes, seconds, millis);
        value
    }

    /// Strict calendar date at midnight.
    ///
    /// # Errors
    /// Returns `ParseError` if the year cannot be packed, the month is not
    /// 1-12, or the day does not exist in that month.
    pub fn try_from_ymd(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(ParseError::YearOutOfRange(i64::from(year)));
        }
        if !(JANUARY..=DECEMBER).contains(&month) {
            return Err(ParseError::InvalidMonth(u32::from(month)));
        }
        if day == 0 || day > calendar::days_in_month(month, year) {
            return Err(ParseError::InvalidDay {
                year,
                month,
                day: u32::from(day),
            });
        }
        Ok(Self {
            year,
            day_of_year: calendar::day_of_year(month, day, year),
            time: 0,
        })
    }

    /// Strict calendar date and time of day.
    ///
    /// # Errors
    /// Returns `ParseError` for any invalid date part (see
    /// [`DateTime::try_from_ymd`]) or a time outside `00:00:00.000..=23:59:59.999`.
    pub fn try_from_ymd_hms_milli(
        year: i32,
        month: u8,
        day: u8,
        hours: u32,
        minutes: u32,
        seconds: u32,
        millis: u32,
    ) -> Result<Self, ParseError> {
        let mut value = Self::try_from_ymd(year, month, day)?;
        if hours > 23 || minutes > 59 || seconds > 59 || millis > 999 {
            return Err(ParseError::InvalidTime {
                hours,
                minutes,
                seconds,
                millis,
            });
        }
        value.set_time_in_place(hours, minutes, seconds, millis);
        Ok(value)
    }

    /// Rebuilds a value from its 64-bit packed form.
    #[inline]
    pub const fn from_rep(rep: i64) -> Self {
        let (year, day_of_year, time) = codec::unpack(rep);
        Self {
            year,
            day_of_year,
            time,
        }
    }

    /// Rebuilds a midnight value from the 32-bit packed date.
    #[inline]
    pub const fn from_int_rep(rep: i32) -> Self {
        let (year, day_of_year) = codec::unpack_date(rep);
        Self {
            year,
            day_of_year,
            time: 0,
        }
    }

    /// Midnight on a date written as the integer `YYYYMMDD` (lenient, like
    /// [`DateTime::from_ymd`]).
    pub fn from_yyyymmdd(ymd: i32) -> Self {
        let year = ymd / 10_000;
        let month = (ymd - year * 10_000) / 100;
        let day = ymd - year * 10_000 - month * 100;
        Self::from_ymd(year, month, day)
    }

    /// 64-bit packed form; orders exactly like the value.
    #[inline]
    pub const fn rep(&self) -> i64 {
        codec::pack(self.year, self.day_of_year, self.time)
    }

    /// 32-bit packed date, dropping the time of day.
    #[inline]
    pub const fn int_rep(&self) -> i32 {
        codec::pack_date(self.year, self.day_of_year)
    }

    /// The date as the integer `YYYYMMDD` (March 17th 1964 is 19640317).
    pub fn to_yyyymmdd(&self) -> i32 {
        let (month, day) = self.month_day();
        self.year * 10_000 + i32::from(month) * 100 + i32::from(day)
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month, 1-12.
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month_day().0
    }

    /// Day of month, 1-31.
    #[inline]
    pub const fn day(&self) -> u8 {
        self.month_day().1
    }

    /// `(month, day)` in one table scan.
    #[inline]
    pub const fn month_day(&self) -> (u8, u8) {
        calendar::month_day(self.day_of_year, self.year)
    }

    /// Day of year, January 1st = 1.
    #[inline]
    pub const fn day_of_year(&self) -> u16 {
        self.day_of_year
    }

    /// Milliseconds since midnight.
    #[inline]
    pub const fn millis_since_midnight(&self) -> u32 {
        self.time
    }

    pub const fn minutes_since_midnight(&self) -> u32 {
        self.time / MILLIS_PER_MINUTE
    }

    pub const fn hours(&self) -> u32 {
        self.time / MILLIS_PER_HOUR
    }

    pub const fn minutes(&self) -> u32 {
        (self.time % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE
    }

    pub const fn seconds(&self) -> u32 {
        (self.time % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND
    }

    pub const fn millis(&self) -> u32 {
        self.time % MILLIS_PER_SECOND
    }

    /// Day of week as an index, Monday = 0 through Sunday = 6.
    #[inline]
    pub const fn day_of_week(&self) -> u8 {
        calendar::day_of_week(self.year, self.day_of_year)
    }

    pub const fn weekday(&self) -> Weekday {
        match Weekday::from_index(self.day_of_week()) {
            Some(weekday) => weekday,
            None => Weekday::Monday,
        }
    }

    /// Week of the current month, 1-5.
    pub const fn week_of_month(&self) -> u8 {
        let month = self.month();
        calendar::week_of_month(self.day_of_year, month, self.year)
    }

    pub const fn week_of_year(&self) -> u16 {
        calendar::week_of_year(self.day_of_year)
    }

    pub const fn is_leap_year(&self) -> bool {
        calendar::is_leap_year(self.year)
    }

    pub const fn is_weekend(&self) -> bool {
        self.weekday().is_weekend()
    }

    pub const fn number_of_days_in_year(&self) -> u16 {
        calendar::days_in_year(self.year)
    }

    /// Days remaining after this one until the new year.
    pub const fn days_left_of_year(&self) -> u16 {
        self.number_of_days_in_year() - self.day_of_year
    }

    /// Fractional years between two values, in either order.
    ///
    /// Within one year this is the inclusive day count over that year's
    /// length; across years the partial years are measured in 365.25-day
    /// years.
    pub fn years_to(&self, other: &Self) -> f64 {
        let (from, to) = if self < other { (self, other) } else { (other, self) };
        if from.year == to.year {
            return f64::from(to.day_of_year - from.day_of_year + 1) / f64::from(to.number_of_days_in_year());
        }
        let year_delta = f64::from(to.year - from.year);
        let tails = f64::from(from.days_left_of_year() + to.day_of_year);
        if year_delta > 1.0 {
            (year_delta - 1.0) + tails / 365.25
        } else {
            tails / 365.25
        }
    }

    /// The same day at midnight.
    #[inline]
    pub const fn at_midnight(self) -> Self {
        Self {
            year:        self.year,
            day_of_year: self.day_of_year,
            time:        0,
        }
    }

    /// Midnight on the first day of this value's month.
    pub const fn first_of_month(self) -> Self {
        let month = self.month();
        Self {
            year:        self.year,
            day_of_year: calendar::first_day_of_month(month, self.year),
            time:        0,
        }
    }

    /// True when both values fall in the same calendar month.
    pub const fn same_month(&self, other: &Self) -> bool {
        self.year == other.year && self.month() == other.month()
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(20);
        CompactFormat.render(self, &mut out);
        f.write_str(&out)
    }
}

impl FromStr for DateTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompactFormat.parse(s)
    }
}

impl From<DateTime> for i64 {
    fn from(value: DateTime) -> Self {
        value.rep()
    }
}

impl From<i64> for DateTime {
    fn from(rep: i64) -> Self {
        Self::from_rep(rep)
    }
}

impl serde::Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
