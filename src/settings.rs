//! Default collaborators: holiday rule, text format and name tables.
//!
//! A `Settings` value is passed explicitly; there is no process-wide
//! instance. Setters replace the current collaborator and hand back the
//! previous one.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    CompactFormat, DateTime, DateTimeFormat, DayMonthNames, ENGLISH, HolidayPredicate, IsoFormat, MutableDateTime,
    NoHolidays, ParseError, SPANISH, UsHolidays,
};

/// Built-in holiday rules selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayRule {
    None,
    #[default]
    Us,
}

/// Built-in name tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Spanish,
}

/// Built-in text forms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    #[default]
    Compact,
    Iso,
}

/// Serializable description of a [`Settings`] value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub holidays: HolidayRule,
    pub language: Language,
    pub format:   TextFormat,
}

impl HolidayRule {
    fn predicate(self) -> Arc<dyn HolidayPredicate> {
        match self {
            Self::None => Arc::new(NoHolidays),
            Self::Us => Arc::new(UsHolidays),
        }
    }
}

impl Language {
    fn names(self) -> Arc<dyn DayMonthNames> {
        match self {
            Self::English => Arc::new(ENGLISH),
            Self::Spanish => Arc::new(SPANISH),
        }
    }
}

impl TextFormat {
    fn format(self) -> Arc<dyn DateTimeFormat> {
        match self {
            Self::Compact => Arc::new(CompactFormat),
            Self::Iso => Arc::new(IsoFormat),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    holidays: Arc<dyn HolidayPredicate>,
    format:   Arc<dyn DateTimeFormat>,
    names:    Arc<dyn DayMonthNames>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Settings {
    pub fn from_config(config: &Config) -> Self {
        debug!(?config, "building settings");
        Self {
            holidays: config.holidays.predicate(),
            format:   config.format.format(),
            names:    config.language.names(),
        }
    }

    pub fn holidays(&self) -> &dyn HolidayPredicate {
        &*self.holidays
    }

    pub fn format(&self) -> &dyn DateTimeFormat {
        &*self.format
    }

    pub fn names(&self) -> &dyn DayMonthNames {
        &*self.names
    }

    /// Replaces the holiday predicate, returning the previous one.
    pub fn set_holidays(&mut self, holidays: Arc<dyn HolidayPredicate>) -> Arc<dyn HolidayPredicate> {
        debug!(previous = ?self.holidays, current = ?holidays, "holiday predicate replaced");
        std::mem::replace(&mut self.holidays, holidays)
    }

    /// Replaces the text format, returning the previous one.
    pub fn set_format(&mut self, format: Arc<dyn DateTimeFormat>) -> Arc<dyn DateTimeFormat> {
        debug!(previous = self.format.pattern(), current = format.pattern(), "text format replaced");
        std::mem::replace(&mut self.format, format)
    }

    /// Replaces the name tables, returning the previous ones.
    pub fn set_names(&mut self, names: Arc<dyn DayMonthNames>) -> Arc<dyn DayMonthNames> {
        debug!(previous = ?self.names, current = ?names, "name tables replaced");
        std::mem::replace(&mut self.names, names)
    }

    /// A cursor over `value` that uses these settings' holidays.
    pub fn cursor(&self, value: DateTime) -> MutableDateTime<'_> {
        MutableDateTime::with_holidays(value, &*self.holidays)
    }

    /// Parses text in the configured format.
    ///
    /// # Errors
    /// Returns `ParseError` as produced by the configured format.
    pub fn parse(&self, text: &str) -> Result<DateTime, ParseError> {
        self.format.parse(text)
    }

    pub fn render(&self, value: &DateTime) -> String {
        self.format.format(value)
    }

    pub fn day_name(&self, value: &DateTime) -> &str {
        self.names.day_name(value.weekday())
    }

    pub fn month_name(&self, value: &DateTime, full: bool) -> Option<&str> {
        self.names.month_name(value.month(), full)
    }
}
