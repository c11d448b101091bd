//! Day and month names for display and lookup.

use std::fmt;

use crate::Weekday;
use crate::consts::{DECEMBER, JANUARY};

/// Localized day and month names. Months are numbered 1-12.
pub trait DayMonthNames: fmt::Debug + Send + Sync {
    fn day_name(&self, weekday: Weekday) -> &str;

    fn day_abbreviation(&self, weekday: Weekday) -> &str;

    /// Full or abbreviated month name, `None` outside 1-12.
    fn month_name(&self, month: u8, full: bool) -> Option<&str>;

    fn month_abbreviation(&self, month: u8) -> Option<&str> {
        self.month_name(month, false)
    }

    /// Weekday for a full or abbreviated name, ignoring ASCII case.
    fn day_index_for_name(&self, name: &str) -> Option<Weekday>;

    /// Month number for a full or abbreviated name, ignoring ASCII case.
    fn month_index_for_name(&self, name: &str) -> Option<u8>;
}

/// Fixed name tables for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameTable {
    days:          [&'static str; 7],
    day_abbrevs:   [&'static str; 7],
    months:        [&'static str; 12],
    month_abbrevs: [&'static str; 12],
}

pub const ENGLISH: NameTable = NameTable {
    days:          ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"],
    day_abbrevs:   ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
    months:        [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    month_abbrevs: ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"],
};

pub const SPANISH: NameTable = NameTable {
    days:          ["lunes", "martes", "miercoles", "jueves", "viernes", "sabado", "domingo"],
    day_abbrevs:   ["lu", "ma", "mi", "ju", "vi", "sa", "do"],
    months:        [
        "enero",
        "febrero",
        "marzo",
        "abril",
        "mayo",
        "junio",
        "julio",
        "agosto",
        "septiembre",
        "octubre",
        "noviembre",
        "diciembre",
    ],
    month_abbrevs: [
        "enero", "feb", "marzo", "abr", "mayo", "jun", "jul", "agosto", "set", "oct", "nov", "dic",
    ],
};

impl NameTable {
    fn month_slot(month: u8) -> Option<usize> {
        (JANUARY..=DECEMBER)
            .contains(&month)
            .then(|| usize::from(month - JANUARY))
    }
}

fn position_ignoring_case(full: &[&str], abbrevs: &[&str], name: &str) -> Option<usize> {
    let name = name.trim();
    full.iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(name))
        .or_else(|| abbrevs.iter().position(|candidate| candidate.eq_ignore_ascii_case(name)))
}

impl DayMonthNames for NameTable {
    fn day_name(&self, weekday: Weekday) -> &str {
        self.days[usize::from(weekday.index())]
    }

    fn day_abbreviation(&self, weekday: Weekday) -> &str {
        self.day_abbrevs[usize::from(weekday.index())]
    }

    fn month_name(&self, month: u8, full: bool) -> Option<&str> {
        let slot = Self::month_slot(month)?;
        Some(if full { self.months[slot] } else { self.month_abbrevs[slot] })
    }

    fn day_index_for_name(&self, name: &str) -> Option<Weekday> {
        let slot = position_ignoring_case(&self.days, &self.day_abbrevs, name)?;
        Weekday::from_index(slot as u8)
    }

    fn month_index_for_name(&self, name: &str) -> Option<u8> {
        position_ignoring_case(&self.months, &self.month_abbrevs, name).map(|slot| slot as u8 + JANUARY)
    }
}
