use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{DateTime, HolidayPredicate, ParseError, RANGE_SEPARATOR, codec, prelude::*};

/// A half-open span of packed date-times, `lower <= rep < upper`.
///
/// Bounds are stored as given, so an inverted range can be built and simply
/// contains nothing. Ordering compares lower bounds first, then upper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}/{}", "DateTime::from_rep(*lower)", "DateTime::from_rep(*upper)")]
pub struct DateTimeRange {
    lower: i64,
    upper: i64,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Lower bound is after upper bound.
    #[error("Invalid date range: lower ({lower}) is after upper ({upper})")]
    InvalidRange { lower: DateTime, upper: DateTime },

    /// Error parsing a bound.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateTimeRange {
    /// Range over raw packed bounds; `upper` is exclusive.
    pub const fn new(lower_rep: i64, upper_rep: i64) -> Self {
        Self {
            lower: lower_rep,
            upper: upper_rep,
        }
    }

    /// Range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if lower > upper.
    pub fn try_new(lower: DateTime, upper: DateTime) -> Result<Self, RangeError> {
        if lower > upper {
            return Err(RangeError::InvalidRange { lower, upper });
        }
        Ok(Self::from_to(lower, upper))
    }

    /// From `lower` up to but excluding `upper`.
    pub const fn from_to(lower: DateTime, upper: DateTime) -> Self {
        Self::new(lower.rep(), upper.rep())
    }

    /// From `lower` up to and including `upper` (to the millisecond).
    pub fn from_up_to(lower: DateTime, upper: DateTime) -> Self {
        Self::new(lower.rep(), upper.add_millis(1).rep())
    }

    /// The calendar year containing `value`.
    pub fn for_year(value: DateTime) -> Self {
        let start = DateTime::from_year_day(value.year(), 1);
        Self::from_to(start, start.next_year())
    }

    /// The calendar month containing `value`.
    pub fn for_month(value: DateTime) -> Self {
        let start = value.first_of_month();
        Self::from_to(start, start.next_month())
    }

    /// The day containing `value`.
    pub fn for_day(value: DateTime) -> Self {
        let start = value.at_midnight();
        Self::from_to(start, start.add_days(1))
    }

    pub const fn lower_rep(&self) -> i64 {
        self.lower
    }

    pub const fn upper_rep(&self) -> i64 {
        self.upper
    }

    pub const fn lower_bound(&self) -> DateTime {
        DateTime::from_rep(self.lower)
    }

    pub const fn upper_bound_exclusive(&self) -> DateTime {
        DateTime::from_rep(self.upper)
    }

    /// The last millisecond inside the range.
    pub fn upper_bound_inclusive(&self) -> DateTime {
        self.upper_bound_exclusive().add_millis(-1)
    }

    /// Date-only form of the bounds, for compact storage.
    pub const fn to_int_reps(&self) -> (i32, i32) {
        (codec::date_part(self.lower), codec::date_part(self.upper))
    }

    /// True when nothing can fall inside.
    pub const fn is_empty(&self) -> bool {
        self.lower >= self.upper
    }

    pub const fn within_rep(&self, rep: i64) -> bool {
        self.lower <= rep && rep < self.upper
    }

    pub const fn within(&self, value: &DateTime) -> bool {
        self.within_rep(value.rep())
    }

    /// At or past the exclusive upper bound.
    pub const fn above(&self, value: &DateTime) -> bool {
        value.rep() >= self.upper
    }

    pub const fn below(&self, value: &DateTime) -> bool {
        value.rep() < self.lower
    }

    /// `other` lies entirely inside this range.
    pub const fn contains(&self, other: &Self) -> bool {
        other.lower >= self.lower && other.upper <= self.upper
    }

    /// Loose test: `other` starts at or after this range's start, or ends at
    /// or before its end. Disjoint ranges on one side still match; use
    /// [`DateTimeRange::overlaps`] for a strict test.
    pub const fn intersects(&self, other: &Self) -> bool {
        other.lower >= self.lower || other.upper <= self.upper
    }

    /// The two ranges share at least one instant.
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.lower < other.upper && other.lower < self.upper
    }

    /// The shared part of two overlapping ranges.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        self.overlaps(other)
            .then(|| Self::new(self.lower.max(other.lower), self.upper.min(other.upper)))
    }

    /// Smallest range covering both.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::new(self.lower.min(other.lower), self.upper.max(other.upper))
    }

    /// Earlier lower and earlier upper bound.
    #[must_use]
    pub fn left(&self, other: &Self) -> Self {
        Self::new(self.lower.min(other.lower), self.upper.min(other.upper))
    }

    /// Later lower and later upper bound.
    #[must_use]
    pub fn right(&self, other: &Self) -> Self {
        Self::new(self.lower.max(other.lower), self.upper.max(other.upper))
    }

    /// Keeps this lower bound, extends the upper bound to the later one.
    #[must_use]
    pub fn higher(&self, other: &Self) -> Self {
        Self::new(self.lower, self.upper.max(other.upper))
    }

    /// Extends the lower bound to the earlier one, keeps this upper bound.
    #[must_use]
    pub fn lower_of(&self, other: &Self) -> Self {
        Self::new(self.lower.min(other.lower), self.upper)
    }

    fn map_bounds(self, shift: impl Fn(DateTime) -> DateTime) -> Self {
        Self::from_to(shift(self.lower_bound()), shift(self.upper_bound_exclusive()))
    }

    #[must_use]
    pub fn add_millis(self, millis: i64) -> Self {
        self.map_bounds(|bound| bound.add_millis(millis))
    }

    #[must_use]
    pub fn add_seconds(self, seconds: i64) -> Self {
        self.map_bounds(|bound| bound.add_seconds(seconds))
    }

    #[must_use]
    pub fn add_minutes(self, minutes: i64) -> Self {
        self.map_bounds(|bound| bound.add_minutes(minutes))
    }

    #[must_use]
    pub fn add_hours(self, hours: i64) -> Self {
        self.map_bounds(|bound| bound.add_hours(hours))
    }

    #[must_use]
    pub fn add_days(self, days: i32) -> Self {
        self.map_bounds(|bound| bound.add_days(days))
    }

    #[must_use]
    pub fn add_weeks(self, weeks: i32) -> Self {
        self.map_bounds(|bound| bound.add_weeks(weeks))
    }

    #[must_use]
    pub fn add_months(self, months: i32) -> Self {
        self.map_bounds(|bound| bound.add_months(months))
    }

    /// Moves both bounds by business days; each lands on midnight.
    #[must_use]
    pub fn add_business_days(self, days: i32, holidays: &dyn HolidayPredicate) -> Self {
        self.map_bounds(|bound| bound.add_business_days(days, holidays))
    }
}

impl FromStr for DateTimeRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (lower_str, upper_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?;

                let lower = lower_str.trim().parse::<DateTime>()?;
                let upper = upper_str.trim().parse::<DateTime>()?;

                Self::try_new(lower, upper)
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for DateTimeRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateTimeRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
