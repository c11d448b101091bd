/// Milliseconds in one second
pub const MILLIS_PER_SECOND: u32 = 1_000;
/// Milliseconds in one minute
pub const MILLIS_PER_MINUTE: u32 = 60 * MILLIS_PER_SECOND;
/// Milliseconds in one hour
pub const MILLIS_PER_HOUR: u32 = 60 * MILLIS_PER_MINUTE;
/// Milliseconds in one day; time of day is always below this
pub const MILLIS_PER_DAY: u32 = 24 * MILLIS_PER_HOUR;

/// Days in a week
pub const DAYS_PER_WEEK: i32 = 7;
/// Months in a year
pub const MONTHS_PER_YEAR: i32 = 12;
/// Months in a quarter
pub const MONTHS_PER_QUARTER: i32 = 3;

/// Days in a common (non-leap) year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;

/// Smallest year the packed forms can hold
pub const MIN_YEAR: i32 = -(1 << 22);
/// Largest year the packed forms can hold
pub const MAX_YEAR: i32 = (1 << 22) - 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March
pub const MARCH: u8 = 3;
/// Month number for May
pub const MAY: u8 = 5;
/// Month number for July
pub const JULY: u8 = 7;
/// Month number for September
pub const SEPTEMBER: u8 = 9;
/// Month number for November
pub const NOVEMBER: u8 = 11;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in each month of a common year (index 0 is January)
pub const DAYS_IN_MONTH: [u8; 12] = [
    31, // January
    28, // February (leap balance added separately)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Day of year on which each month starts in a common year (index 0 is January)
pub const FIRST_DAY_OF_MONTH: [u16; 12] = [1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Width of the day-of-year field in both packed forms
pub(crate) const DAY_BITS: u32 = 9;
/// Width of the time-of-day field in the 64-bit packed form
pub(crate) const TIME_BITS: u32 = 28;
pub(crate) const DAY_MASK: i64 = (1 << DAY_BITS) - 1;
pub(crate) const TIME_MASK: i64 = (1 << TIME_BITS) - 1;

/// Separator between date and time in the compact text form
pub const COMPACT_TIME_SEPARATOR: char = '.';
/// Digits in the time part of the compact text form (`HHMMSSmmm`)
pub const COMPACT_TIME_DIGITS: usize = 9;
/// Range separator (ISO 8601 interval style)
pub const RANGE_SEPARATOR: char = '/';
/// Date component separator in the ISO-like text form
pub const DATE_SEPARATOR: char = '-';
