//! Conversions to and from broken-down calendar fields.

use serde::{Deserialize, Serialize};

use crate::{DateTime, ParseError};

/// A date-time as separate calendar fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateTimeParts {
    pub year:        i32,
    pub month:       u8,
    pub day:         u8,
    pub hour:        u32,
    pub minute:      u32,
    pub second:      u32,
    pub millisecond: u32,
}

impl From<DateTime> for DateTimeParts {
    fn from(value: DateTime) -> Self {
        let (month, day) = value.month_day();
        Self {
            year: value.year(),
            month,
            day,
            hour: value.hours(),
            minute: value.minutes(),
            second: value.seconds(),
            millisecond: value.millis(),
        }
    }
}

impl TryFrom<DateTimeParts> for DateTime {
    type Error = ParseError;

    fn try_from(parts: DateTimeParts) -> Result<Self, Self::Error> {
        Self::try_from_ymd_hms_milli(
            parts.year,
            parts.month,
            parts.day,
            parts.hour,
            parts.minute,
            parts.second,
            parts.millisecond,
        )
    }
}

#[cfg(feature = "chrono")]
mod naive {
    use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

    use crate::{DateTime, ParseError};

    /// Years here count 1 BC as -1 with no year 0; chrono counts 1 BC as 0.
    const fn to_astronomical(year: i32) -> Option<i32> {
        match year {
            0 => None,
            year if year < 0 => Some(year + 1),
            year => Some(year),
        }
    }

    const fn from_astronomical(year: i32) -> i32 {
        if year <= 0 { year - 1 } else { year }
    }

    impl DateTime {
        /// The same instant as a chrono value; `None` for year 0.
        pub fn to_naive(&self) -> Option<NaiveDateTime> {
            let (month, day) = self.month_day();
            NaiveDate::from_ymd_opt(to_astronomical(self.year())?, u32::from(month), u32::from(day))?.and_hms_milli_opt(
                self.hours(),
                self.minutes(),
                self.seconds(),
                self.millis(),
            )
        }

        /// # Errors
        /// Returns `ParseError` for leap seconds and years outside the
        /// packable range.
        pub fn from_naive(value: &NaiveDateTime) -> Result<Self, ParseError> {
            Self::try_from_ymd_hms_milli(
                from_astronomical(value.year()),
                value.month() as u8,
                value.day() as u8,
                value.hour(),
                value.minute(),
                value.second(),
                value.nanosecond() / 1_000_000,
            )
        }
    }

    impl TryFrom<NaiveDateTime> for DateTime {
        type Error = ParseError;

        fn try_from(value: NaiveDateTime) -> Result<Self, Self::Error> {
            Self::from_naive(&value)
        }
    }

}
