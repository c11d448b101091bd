//! Holiday predicates.
//!
//! A predicate only answers "is this date a holiday"; weekends are handled
//! by the business-day traversal, not here.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::consts::{DECEMBER, JULY, MAY, NOVEMBER, SEPTEMBER};
use crate::{DateTime, Weekday};

/// Decides whether a date is a holiday.
pub trait HolidayPredicate: fmt::Debug + Send + Sync {
    fn is_holiday(&self, value: &DateTime) -> bool;

    /// A weekday that is not a holiday.
    fn is_business_day(&self, value: &DateTime) -> bool {
        !value.is_weekend() && !self.is_holiday(value)
    }
}

/// Predicate used when no other is supplied.
pub(crate) static DEFAULT_HOLIDAYS: UsHolidays = UsHolidays;

/// No date is a holiday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoHolidays;

impl HolidayPredicate for NoHolidays {
    fn is_holiday(&self, _value: &DateTime) -> bool {
        false
    }
}

/// Common US market holidays.
///
/// Independence Day, Christmas Eve, Christmas Day and New Year's Eve on
/// their fixed dates, Memorial Day (last Monday in May), Labor Day (first
/// Monday in September) and Thanksgiving (fourth Thursday in November).
/// Fixed dates are not shifted off weekends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UsHolidays;

impl UsHolidays {
    fn is_thanksgiving(value: &DateTime, day: u8) -> bool {
        value.week_of_month() >= 4 && (22..=28).contains(&day) && value.weekday() == Weekday::Thursday
    }
}

impl HolidayPredicate for UsHolidays {
    fn is_holiday(&self, value: &DateTime) -> bool {
        let (month, day) = value.month_day();
        match month {
            MAY => day > 24 && value.weekday() == Weekday::Monday,
            JULY => day == 4,
            SEPTEMBER => day < 8 && value.weekday() == Weekday::Monday,
            NOVEMBER => Self::is_thanksgiving(value, day),
            DECEMBER => matches!(day, 24 | 25 | 31),
            _ => false,
        }
    }
}

/// Holidays given as an explicit set of dates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BespokeHolidays {
    dates: BTreeSet<i32>,
}

impl BespokeHolidays {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the date of `value` as a holiday; the time of day is ignored.
    pub fn add(&mut self, value: DateTime) -> &mut Self {
        self.dates.insert(value.int_rep());
        self
    }

    pub fn remove(&mut self, value: DateTime) -> bool {
        self.dates.remove(&value.int_rep())
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// The listed dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = DateTime> + '_ {
        self.dates.iter().map(|&rep| DateTime::from_int_rep(rep))
    }
}

impl FromIterator<DateTime> for BespokeHolidays {
    fn from_iter<T: IntoIterator<Item = DateTime>>(iter: T) -> Self {
        Self {
            dates: iter.into_iter().map(|value| value.int_rep()).collect(),
        }
    }
}

impl HolidayPredicate for BespokeHolidays {
    fn is_holiday(&self, value: &DateTime) -> bool {
        self.dates.contains(&value.int_rep())
    }
}

/// Adapts a closure into a predicate.
#[derive(Clone, Copy)]
pub struct FnHolidays<F>(F);

impl<F> FnHolidays<F>
where
    F: Fn(&DateTime) -> bool + Send + Sync,
{
    pub const fn new(predicate: F) -> Self {
        Self(predicate)
    }
}

impl<F> fmt::Debug for FnHolidays<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnHolidays(..)")
    }
}

impl<F> HolidayPredicate for FnHolidays<F>
where
    F: Fn(&DateTime) -> bool + Send + Sync,
{
    fn is_holiday(&self, value: &DateTime) -> bool {
        (self.0)(value)
    }
}

/// A date is a holiday if any member predicate says so.
#[derive(Debug, Clone, Default)]
pub struct JointHolidays {
    members: Vec<Arc<dyn HolidayPredicate>>,
}

impl JointHolidays {
    pub fn new(members: Vec<Arc<dyn HolidayPredicate>>) -> Self {
        Self { members }
    }

    #[must_use]
    pub fn with(mut self, member: Arc<dyn HolidayPredicate>) -> Self {
        self.members.push(member);
        self
    }
}

impl HolidayPredicate for JointHolidays {
    fn is_holiday(&self, value: &DateTime) -> bool {
        self.members.iter().any(|member| member.is_holiday(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ymd;

    #[test]
    fn test_us_holidays() {
        struct TestCase {
            date:        DateTime,
            is_holiday:  bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                date:        ymd(2012, 7, 4),
                is_holiday:  true,
                description: "Independence Day",
            },
            TestCase {
                date:        ymd(2012, 7, 5),
                is_holiday:  false,
                description: "day after Independence Day",
            },
            TestCase {
                date:        ymd(2012, 12, 24),
                is_holiday:  true,
                description: "Christmas Eve",
            },
            TestCase {
                date:        ymd(2012, 12, 25),
                is_holiday:  true,
                description: "Christmas Day",
            },
            TestCase {
                date:        ymd(2012, 12, 31),
                is_holiday:  true,
                description: "New Year's Eve",
            },
            TestCase {
                date:        ymd(2012, 5, 28),
                is_holiday:  true,
                description: "Memorial Day",
            },
            TestCase {
                date:        ymd(2012, 5, 21),
                is_holiday:  false,
                description: "Monday a week before Memorial Day",
            },
            TestCase {
                date:        ymd(2012, 9, 3),
                is_holiday:  true,
                description: "Labor Day",
            },
            TestCase {
                date:        ymd(2012, 9, 10),
                is_holiday:  false,
                description: "second Monday of September",
            },
            TestCase {
                date:        ymd(2012, 11, 22),
                is_holiday:  true,
                description: "Thanksgiving on the 22nd",
            },
            TestCase {
                date:        ymd(2024, 11, 28),
                is_holiday:  true,
                description: "Thanksgiving on the 28th",
            },
            TestCase {
                date:        ymd(2012, 11, 29),
                is_holiday:  false,
                description: "fifth Thursday of November",
            },
            TestCase {
                date:        ymd(2012, 1, 1),
                is_holiday:  false,
                description: "New Year's Day is not in the rule",
            },
        ];

        for case in &cases {
            assert_eq!(
                UsHolidays.is_holiday(&case.date),
                case.is_holiday,
                "{} ({})",
                case.date,
                case.description
            );
        }
    }

    #[test]
    fn test_is_business_day_excludes_weekends() {
        // 2012-07-07 is a Saturday
        assert!(!NoHolidays.is_business_day(&ymd(2012, 7, 7)));
        assert!(NoHolidays.is_business_day(&ymd(2012, 7, 4)));
        assert!(!UsHolidays.is_business_day(&ymd(2012, 7, 4)));
    }

    #[test]
    fn test_bespoke_holidays() {
        let mut holidays = BespokeHolidays::new();
        let date = ymd(2024, 3, 15);
        assert!(!holidays.is_holiday(&date));

        holidays.add(date);
        assert!(holidays.is_holiday(&date));
        assert!(holidays.is_holiday(&date.with_time(12, 0, 0, 0)));
        assert_eq!(holidays.len(), 1);

        assert!(holidays.remove(date));
        assert!(holidays.is_empty());
    }

    #[test]
    fn test_bespoke_from_iterator() {
        let holidays: BespokeHolidays = [ymd(2024, 1, 2), ymd(2023, 12, 29)].into_iter().collect();
        let listed: Vec<DateTime> = holidays.iter().collect();
        assert_eq!(listed, vec![ymd(2023, 12, 29), ymd(2024, 1, 2)]);
    }

    #[test]
    fn test_fn_holidays() {
        let first_of_month = FnHolidays::new(|value: &DateTime| value.day() == 1);
        assert!(first_of_month.is_holiday(&ymd(2024, 5, 1)));
        assert!(!first_of_month.is_holiday(&ymd(2024, 5, 2)));
        assert_eq!(format!("{first_of_month:?}"), "FnHolidays(..)");
    }

    #[test]
    fn test_joint_holidays() {
        let bespoke: BespokeHolidays = [ymd(2012, 3, 14)].into_iter().collect();
        let joint = JointHolidays::default().with(Arc::new(UsHolidays)).with(Arc::new(bespoke));

        assert!(joint.is_holiday(&ymd(2012, 7, 4)));
        assert!(joint.is_holiday(&ymd(2012, 3, 14)));
        assert!(!joint.is_holiday(&ymd(2012, 3, 15)));
        assert!(!JointHolidays::default().is_holiday(&ymd(2012, 7, 4)));
    }
}
