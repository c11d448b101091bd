//! Stepping sequences of date-times.
//!
//! A [`Sequence`] describes where to start, how to step and where to stop;
//! it can be iterated any number of times. Each pass is a [`DateTimeIter`].

use std::iter::FusedIterator;

use tracing::trace;

use crate::consts::{DAYS_PER_WEEK, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND, MONTHS_PER_QUARTER};
use crate::{DateTime, DateTimeRange, HolidayPredicate};

/// Advances a cursor by one step.
pub trait Incrementer {
    fn increment(&self, cursor: &mut DateTime);
}

/// Fixed calendar steps. Negative amounts walk backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Years(i32),
    Quarters(i32),
    Months(i32),
    Weeks(i32),
    Days(i32),
    Hours(i32),
    Minutes(i32),
    Seconds(i32),
    Millis(i32),
}

impl Incrementer for Step {
    fn increment(&self, cursor: &mut DateTime) {
        match *self {
            Self::Years(n) => cursor.add_years_in_place(n),
            Self::Quarters(n) => cursor.roll_months_in_place(i64::from(n) * i64::from(MONTHS_PER_QUARTER)),
            Self::Months(n) => cursor.roll_months_in_place(i64::from(n)),
            Self::Weeks(n) => cursor.add_days_in_place(i64::from(n) * i64::from(DAYS_PER_WEEK)),
            Self::Days(n) => cursor.add_days_in_place(i64::from(n)),
            Self::Hours(n) => cursor.add_millis_in_place(i64::from(n) * i64::from(MILLIS_PER_HOUR)),
            Self::Minutes(n) => cursor.add_millis_in_place(i64::from(n) * i64::from(MILLIS_PER_MINUTE)),
            Self::Seconds(n) => cursor.add_millis_in_place(i64::from(n) * i64::from(MILLIS_PER_SECOND)),
            Self::Millis(n) => cursor.add_millis_in_place(i64::from(n)),
        }
    }
}

/// Steps to the next business day under the given predicate.
#[derive(Debug, Clone, Copy)]
pub struct BusinessDays<'h>(pub &'h dyn HolidayPredicate);

impl Incrementer for BusinessDays<'_> {
    fn increment(&self, cursor: &mut DateTime) {
        cursor.next_business_day_in_place(self.0);
    }
}

impl<F> Incrementer for F
where
    F: Fn(&mut DateTime),
{
    fn increment(&self, cursor: &mut DateTime) {
        self(cursor);
    }
}

/// A restartable sequence: a start, a step and an optional stop bound.
#[derive(Debug, Clone)]
pub struct Sequence<I> {
    start:     DateTime,
    increment: I,
    bound:     Option<DateTimeRange>,
}

impl<I: Incrementer> Sequence<I> {
    /// An unbounded sequence from `start`.
    pub const fn new(start: DateTime, increment: I) -> Self {
        Self {
            start,
            increment,
            bound: None,
        }
    }

    /// Starts at the range's lower bound and stops before its upper bound.
    pub fn bounded(range: DateTimeRange, increment: I) -> Self {
        Self {
            start: range.lower_bound(),
            increment,
            bound: Some(range),
        }
    }

    /// Stops once the cursor reaches the range's exclusive upper bound.
    #[must_use]
    pub fn within(mut self, range: DateTimeRange) -> Self {
        self.bound = Some(range);
        self
    }

    pub const fn start(&self) -> DateTime {
        self.start
    }

    pub const fn bound(&self) -> Option<DateTimeRange> {
        self.bound
    }

    /// A fresh pass from the start.
    pub fn iter(&self) -> DateTimeIter<I>
    where
        I: Clone,
    {
        DateTimeIter::new(self.start, self.increment.clone(), self.bound)
    }
}

impl<I: Incrementer> IntoIterator for Sequence<I> {
    type Item = DateTime;
    type IntoIter = DateTimeIter<I>;

    fn into_iter(self) -> Self::IntoIter {
        DateTimeIter::new(self.start, self.increment, self.bound)
    }
}

impl<I: Incrementer + Clone> IntoIterator for &Sequence<I> {
    type Item = DateTime;
    type IntoIter = DateTimeIter<I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One pass over a [`Sequence`].
///
/// Each `next` returns the current cursor and then steps it.
#[derive(Debug, Clone)]
pub struct DateTimeIter<I> {
    cursor:    Option<DateTime>,
    increment: I,
    upper:     Option<i64>,
}

impl<I: Incrementer> DateTimeIter<I> {
    fn new(start: DateTime, increment: I, bound: Option<DateTimeRange>) -> Self {
        Self {
            cursor: Some(start),
            increment,
            upper: bound.map(|range| range.upper_rep()),
        }
    }

    /// True while another value will be produced.
    pub fn has_next(&self) -> bool {
        match self.cursor {
            Some(cursor) => self.upper.is_none_or(|upper| cursor.rep() < upper),
            None => false,
        }
    }

    /// The value the next call to `next` would return.
    pub fn peek(&self) -> Option<DateTime> {
        if self.has_next() { self.cursor } else { None }
    }

    /// Ends the pass; later calls to `next` return `None`.
    pub fn terminate(&mut self) {
        if let Some(cursor) = self.cursor.take() {
            trace!(%cursor, "iteration terminated");
        }
    }
}

impl<I: Incrementer> Iterator for DateTimeIter<I> {
    type Item = DateTime;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            self.cursor = None;
            return None;
        }
        let cursor = self.cursor.as_mut()?;
        let current = *cursor;
        self.increment.increment(cursor);
        Some(current)
    }
}

impl<I: Incrementer> FusedIterator for DateTimeIter<I> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holidays::UsHolidays;
    use crate::test_utils::{ymd, ymd_hms};

    #[test]
    fn test_unbounded_daily_steps() {
        let days: Vec<DateTime> = Sequence::new(ymd(2012, 2, 27), Step::Days(1)).into_iter().take(4).collect();
        assert_eq!(days, vec![ymd(2012, 2, 27), ymd(2012, 2, 28), ymd(2012, 2, 29), ymd(2012, 3, 1)]);
    }

    #[test]
    fn test_bounded_excludes_upper() {
        let range = DateTimeRange::from_to(ymd(2012, 1, 1), ymd(2012, 1, 4));
        let days: Vec<DateTime> = Sequence::bounded(range, Step::Days(1)).into_iter().collect();
        assert_eq!(days, vec![ymd(2012, 1, 1), ymd(2012, 1, 2), ymd(2012, 1, 3)]);

        let inclusive = DateTimeRange::from_up_to(ymd(2012, 1, 1), ymd(2012, 1, 4));
        assert_eq!(Sequence::bounded(inclusive, Step::Days(1)).into_iter().count(), 4);
    }

    #[test]
    fn test_sequence_is_restartable() {
        let sequence = Sequence::bounded(DateTimeRange::for_year(ymd(2012, 6, 1)), Step::Months(1));
        let first: Vec<DateTime> = sequence.iter().collect();
        let second: Vec<DateTime> = (&sequence).into_iter().collect();
        assert_eq!(first.len(), 12);
        assert_eq!(first, second);
        assert_eq!(first.last(), Some(&ymd(2012, 12, 1)));
    }

    #[test]
    fn test_step_units() {
        struct TestCase {
            step:     Step,
            expected: DateTime,
        }

        let start = ymd_hms(2012, 1, 31, 12, 0, 0, 0);
        let cases = [
            TestCase {
                step:     Step::Years(1),
                expected: ymd_hms(2013, 1, 31, 12, 0, 0, 0),
            },
            TestCase {
                step:     Step::Quarters(1),
                expected: ymd_hms(2012, 4, 30, 12, 0, 0, 0),
            },
            TestCase {
                step:     Step::Months(1),
                expected: ymd_hms(2012, 2, 29, 12, 0, 0, 0),
            },
            TestCase {
                step:     Step::Weeks(-1),
                expected: ymd_hms(2012, 1, 24, 12, 0, 0, 0),
            },
            TestCase {
                step:     Step::Hours(12),
                expected: ymd(2012, 2, 1),
            },
            TestCase {
                step:     Step::Minutes(-30),
                expected: ymd_hms(2012, 1, 31, 11, 30, 0, 0),
            },
            TestCase {
                step:     Step::Seconds(90),
                expected: ymd_hms(2012, 1, 31, 12, 1, 30, 0),
            },
            TestCase {
                step:     Step::Millis(1),
                expected: ymd_hms(2012, 1, 31, 12, 0, 0, 1),
            },
        ];

        for case in &cases {
            let mut cursor = start;
            case.step.increment(&mut cursor);
            assert_eq!(cursor, case.expected, "{:?}", case.step);
        }
    }

    #[test]
    fn test_business_day_steps() {
        let days: Vec<DateTime> = Sequence::new(ymd(2012, 11, 20), BusinessDays(&UsHolidays))
            .into_iter()
            .take(3)
            .collect();
        assert_eq!(days, vec![ymd(2012, 11, 20), ymd(2012, 11, 21), ymd(2012, 11, 23)]);
    }

    #[test]
    fn test_closure_increment() {
        let every_other_day = |cursor: &mut DateTime| *cursor = cursor.add_days(2);
        let days: Vec<DateTime> = Sequence::new(ymd(2012, 3, 1), every_other_day).into_iter().take(3).collect();
        assert_eq!(days, vec![ymd(2012, 3, 1), ymd(2012, 3, 3), ymd(2012, 3, 5)]);
    }

    #[test]
    fn test_terminate_and_has_next() {
        let mut iter = Sequence::new(ymd(2012, 3, 1), Step::Days(1)).into_iter();
        assert!(iter.has_next());
        assert_eq!(iter.peek(), Some(ymd(2012, 3, 1)));
        assert_eq!(iter.next(), Some(ymd(2012, 3, 1)));

        iter.terminate();
        assert!(!iter.has_next());
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_start_past_bound_is_empty() {
        let range = DateTimeRange::from_to(ymd(2012, 1, 1), ymd(2012, 1, 4));
        let mut iter = Sequence::new(ymd(2012, 2, 1), Step::Days(1)).within(range).into_iter();
        assert!(!iter.has_next());
        assert_eq!(iter.next(), None);
    }
}
