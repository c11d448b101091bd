//! Text forms of a date-time.

use std::fmt;

use crate::consts::{COMPACT_TIME_DIGITS, COMPACT_TIME_SEPARATOR, DATE_SEPARATOR, MAX_YEAR, MIN_YEAR};
use crate::{DateTime, ParseError};

/// Renders and parses one text form.
pub trait DateTimeFormat: fmt::Debug + Send + Sync {
    /// Appends the text form of `value` to `out`.
    fn render(&self, value: &DateTime, out: &mut String);

    /// Parses text written in this form.
    ///
    /// # Errors
    /// Returns `ParseError` when the text does not match the form or names
    /// a date or time that does not exist.
    fn parse(&self, text: &str) -> Result<DateTime, ParseError>;

    /// Human-readable pattern, e.g. `YYYYMMDD.HHMMSSmmm`.
    fn pattern(&self) -> &str;

    fn format(&self, value: &DateTime) -> String {
        let mut out = String::with_capacity(self.pattern().len() + 1);
        self.render(value, &mut out);
        out
    }
}

/// `YYYYMMDD.HHMMSSmmm`, the default form.
///
/// The date part is the integer `year * 10000 + month * 100 + day` without
/// padding, with a leading `-` for negative years. The time part is always
/// nine digits and may be omitted when parsing, meaning midnight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompactFormat;

/// `YYYY-MM-DDTHH:MM:SS.mmm`. Parsing accepts a bare date and an
/// optional millisecond part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsoFormat;

fn invalid(text: &str) -> ParseError {
    ParseError::InvalidFormat(text.to_string())
}

fn all_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Splits a leading minus sign off `text`.
fn split_sign(text: &str) -> (bool, &str) {
    match text.strip_prefix(DATE_SEPARATOR) {
        Some(rest) => (true, rest),
        None => (false, text),
    }
}

fn signed_year(negative: bool, magnitude: u64) -> Result<i32, ParseError> {
    let magnitude = i64::try_from(magnitude).map_err(|_| ParseError::YearOutOfRange(i64::MAX))?;
    let year = if negative { -magnitude } else { magnitude };
    if year < i64::from(MIN_YEAR) || year > i64::from(MAX_YEAR) {
        return Err(ParseError::YearOutOfRange(year));
    }
    Ok(year as i32)
}

impl DateTimeFormat for CompactFormat {
    fn render(&self, value: &DateTime, out: &mut String) {
        let (month, day) = value.month_day();
        let date = u64::from(value.year().unsigned_abs()) * 10_000 + u64::from(month) * 100 + u64::from(day);
        let time = value.hours() * 10_000_000 + value.minutes() * 100_000 + value.seconds() * 1_000 + value.millis();
        if value.year() < 0 {
            out.push(DATE_SEPARATOR);
        }
        out.push_str(&format!("{date}{COMPACT_TIME_SEPARATOR}{time:0width$}", width = COMPACT_TIME_DIGITS));
    }

    fn parse(&self, text: &str) -> Result<DateTime, ParseError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let (date_str, time_str) = match trimmed.split_once(COMPACT_TIME_SEPARATOR) {
            Some((date, time)) => (date, Some(time)),
            None => (trimmed, None),
        };

        let (negative, digits) = split_sign(date_str);
        if !all_digits(digits) {
            return Err(invalid(text));
        }
        let date: u64 = digits.parse().map_err(|_| invalid(text))?;
        let year = signed_year(negative, date / 10_000)?;
        let month = (date / 100 % 100) as u8;
        let day = (date % 100) as u8;

        let time: u32 = match time_str {
            Some(time) if time.len() == COMPACT_TIME_DIGITS && all_digits(time) => {
                time.parse().map_err(|_| invalid(text))?
            },
            Some(_) => return Err(invalid(text)),
            None => 0,
        };

        DateTime::try_from_ymd_hms_milli(
            year,
            month,
            day,
            time / 10_000_000,
            time / 100_000 % 100,
            time / 1_000 % 100,
            time % 1_000,
        )
    }

    fn pattern(&self) -> &str {
        "YYYYMMDD.HHMMSSmmm"
    }
}

impl IsoFormat {
    fn parse_time(text: &str, original: &str) -> Result<(u32, u32, u32, u32), ParseError> {
        let (hms, millis) = match text.split_once('.') {
            Some((hms, millis)) if millis.len() == 3 && all_digits(millis) => {
                (hms, millis.parse().map_err(|_| invalid(original))?)
            },
            Some(_) => return Err(invalid(original)),
            None => (text, 0),
        };

        let mut parts = [0u32; 3];
        let mut fields = hms.split(':');
        for part in &mut parts {
            let field = fields.next().ok_or_else(|| invalid(original))?;
            if field.len() != 2 || !all_digits(field) {
                return Err(invalid(original));
            }
            *part = field.parse().map_err(|_| invalid(original))?;
        }
        if fields.next().is_some() {
            return Err(invalid(original));
        }

        Ok((parts[0], parts[1], parts[2], millis))
    }
}

impl DateTimeFormat for IsoFormat {
    fn render(&self, value: &DateTime, out: &mut String) {
        let (month, day) = value.month_day();
        let year = value.year();
        if year < 0 {
            out.push(DATE_SEPARATOR);
        }
        out.push_str(&format!(
            "{:04}-{month:02}-{day:02}T{:02}:{:02}:{:02}.{:03}",
            year.unsigned_abs(),
            value.hours(),
            value.minutes(),
            value.seconds(),
            value.millis()
        ));
    }

    fn parse(&self, text: &str) -> Result<DateTime, ParseError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let (date_str, time_str) = match trimmed.split_once('T') {
            Some((date, time)) => (date, Some(time)),
            None => (trimmed, None),
        };

        let (negative, unsigned) = split_sign(date_str);
        let mut fields = unsigned.split(DATE_SEPARATOR);
        let (Some(year_str), Some(month_str), Some(day_str), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(invalid(text));
        };
        if year_str.len() < 4 || !all_digits(year_str) || month_str.len() != 2 || day_str.len() != 2 {
            return Err(invalid(text));
        }
        if !all_digits(month_str) || !all_digits(day_str) {
            return Err(invalid(text));
        }

        let magnitude: u64 = year_str.parse().map_err(|_| invalid(text))?;
        let year = signed_year(negative, magnitude)?;
        let month: u8 = month_str.parse().map_err(|_| invalid(text))?;
        let day: u8 = day_str.parse().map_err(|_| invalid(text))?;

        let (hours, minutes, seconds, millis) = match time_str {
            Some(time) => Self::parse_time(time, text)?,
            None => (0, 0, 0, 0),
        };

        DateTime::try_from_ymd_hms_milli(year, month, day, hours, minutes, seconds, millis)
    }

    fn pattern(&self) -> &str {
        "YYYY-MM-DDTHH:MM:SS.mmm"
    }
}
