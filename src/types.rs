use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Day of the week, numbered Monday = 0 through Sunday = 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Weekday {
    Monday = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
    Saturday = 5,
    Sunday = 6,
}

impl Weekday {
    /// All seven days in index order.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Creates a weekday from its 0-based index.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 7 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Returns the 0-based index, Monday = 0.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Saturday or Sunday.
    #[inline]
    pub const fn is_weekend(self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }
}

/// Error returned when a weekday index is outside `0..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Invalid weekday index: {0} (must be 0-6)")]
pub struct InvalidWeekday(pub u8);

impl TryFrom<u8> for Weekday {
    type Error = InvalidWeekday;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value).ok_or(InvalidWeekday(value))
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.index()
    }
}
