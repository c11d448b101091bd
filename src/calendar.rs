//! Pure Gregorian calendar arithmetic over `(year, day_of_year)`.
//!
//! Nothing here holds state or fails. Month arguments are expected in
//! `1..=12`; callers clamp before calling.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_MONTH, DAYS_PER_WEEK, FEBRUARY, FIRST_DAY_OF_MONTH,
    GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE,
};

/// Returns 1 if `year` is a leap year, 0 otherwise.
///
/// Years at or below zero are read as BC with no year zero, so `-1` is
/// tested as year 0 of the proleptic cycle, `-5` as year 4, and so on.
#[inline]
pub const fn leap_year_balance(year: i32) -> u16 {
    let adjusted = if year > 0 { year } else { -(year + 1) };
    if adjusted % LEAP_YEAR_CYCLE != 0
        || (adjusted % CENTURY_CYCLE == 0 && adjusted % GREGORIAN_CYCLE != 0)
    {
        0
    } else {
        1
    }
}

/// Checks if a year is a leap year.
#[inline]
pub const fn is_leap_year(year: i32) -> bool {
    leap_year_balance(year) == 1
}

/// Number of days in `year` (365 or 366).
#[inline]
pub const fn days_in_year(year: i32) -> u16 {
    DAYS_IN_COMMON_YEAR + leap_year_balance(year)
}

/// Number of days in `month` (1..=12) of `year`.
#[inline]
pub const fn days_in_month(month: u8, year: i32) -> u8 {
    let index = (month - 1) as usize;
    if month == FEBRUARY {
        DAYS_IN_MONTH[index] + leap_year_balance(year) as u8
    } else {
        DAYS_IN_MONTH[index]
    }
}

/// Day of year on which `month` starts in `year`.
#[inline]
pub const fn first_day_of_month(month: u8, year: i32) -> u16 {
    let base = FIRST_DAY_OF_MONTH[(month - 1) as usize];
    if month > FEBRUARY {
        base + leap_year_balance(year)
    } else {
        base
    }
}

/// Month (1..=12) containing `day_of_year`, or `None` when the day is
/// before January 1.
pub const fn month_of(day_of_year: u16, year: i32) -> Option<u8> {
    let mut month = 12;
    while month >= JANUARY {
        if first_day_of_month(month, year) <= day_of_year {
            return Some(month);
        }
        month -= 1;
    }
    None
}

/// Day of month for a day of year already known to fall in `month`.
#[inline]
pub const fn day_of_month(day_of_year: u16, month: u8, year: i32) -> u8 {
    (day_of_year - first_day_of_month(month, year) + 1) as u8
}

/// Splits a day of year into `(month, day)`.
pub const fn month_day(day_of_year: u16, year: i32) -> (u8, u8) {
    match month_of(day_of_year, year) {
        Some(month) => (month, day_of_month(day_of_year, month, year)),
        None => (JANUARY, 1),
    }
}

/// Day of year for a month and day that are already in range.
#[inline]
pub const fn day_of_year(month: u8, day: u8, year: i32) -> u16 {
    first_day_of_month(month, year) + day as u16 - 1
}

/// Days from January 1 of year 1 to January 1 of `year`.
///
/// Leap years are counted with the same BC shift as [`leap_year_balance`],
/// so years 0 and 1 both read as common year 1 of the cycle.
const fn days_before_year(year: i32) -> i64 {
    let year = year as i64;
    let cycle_years = if year > 0 { year - 1 } else { year };
    (year - 1) * DAYS_IN_COMMON_YEAR as i64 + cycle_years.div_euclid(LEAP_YEAR_CYCLE as i64)
        - cycle_years.div_euclid(CENTURY_CYCLE as i64)
        + cycle_years.div_euclid(GREGORIAN_CYCLE as i64)
}

/// Day of week, 0 (Monday) through 6 (Sunday).
///
/// January 1 of year 1 is a Monday.
pub const fn day_of_week(year: i32, day_of_year: u16) -> u8 {
    (days_before_year(year) + day_of_year as i64 - 1).rem_euclid(DAYS_PER_WEEK as i64) as u8
}

/// Week of the month (1..=5) that `day_of_year` falls in, counting from the first.
#[inline]
pub const fn week_of_month(day_of_year: u16, month: u8, year: i32) -> u8 {
    let into_month = day_of_month(day_of_year, month, year);
    into_month.div_ceil(DAYS_PER_WEEK as u8)
}

/// Common week of the year.
#[inline]
pub const fn week_of_year(day_of_year: u16) -> u16 {
    day_of_year / DAYS_PER_WEEK as u16 + 1
}
