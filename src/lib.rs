//! Gregorian month grids and printable calendars.
//!
//! ```
//! use calendar_grid::{CalendarConfig, TextCalendar, Weekday, month_range};
//!
//! assert_eq!(month_range(2000, 2).unwrap(), (Weekday::Tuesday, 29));
//!
//! let calendar = TextCalendar::new(CalendarConfig::default());
//! let text = calendar.render_month(2026, 2, 2, 0).unwrap();
//! assert!(text.contains("February 2026"));
//! ```

mod config;
mod consts;
mod grid;
mod holiday;
mod html;
mod locale;
mod math;
mod prelude;
mod text;
mod types;

pub use config::{
    CalendarConfig, active_config, set_active_config, set_first_weekday, set_locale,
};
pub use consts::*;
pub use grid::{MonthGrid, Week, month_grid};
pub use holiday::HolidayRegistry;
pub use html::HtmlCalendar;
pub use locale::Locale;
pub use math::{count_leap_years, days_in_month, month_range, weekday_of};
pub use text::{TextCalendar, YearWeeks};
pub use types::{Day, Month, Weekday, is_leap_year};

use std::fmt;
use std::str::FromStr;

/// Error type for every fallible operation in the crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Month number outside `1..=12`.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth { month: u8 },

    /// Day number that does not exist in its month.
    #[error("invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },

    /// Weekday number outside `0..=6`.
    #[error("invalid weekday: {weekday} (must be 0..=6)")]
    InvalidWeekday { weekday: u8 },

    /// Name tables with the wrong number of entries.
    #[error("invalid locale: {reason}")]
    InvalidLocale { reason: String },

    /// Text that could not be parsed.
    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

/// A calendar date on the proleptic Gregorian calendar.
///
/// Dates order chronologically and display as ISO 8601 `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year:  i32,
    month: Month,
    day:   Day,
}

impl Date {
    /// Creates a date, checking the month and the day against it.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` or `CalendarError::InvalidDay`.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let day = Day::new(day, year, month)?;
        let month = Month::new(month)?;
        Ok(Self { year, month, day })
    }

    /// Assembles a date from components already checked against each other.
    pub(crate) const fn from_parts(year: i32, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month as u8 for convenience
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day as u8 for convenience
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    pub const fn weekday(&self) -> Weekday {
        math::weekday_of_valid(self.year, self.month, self.day)
    }

    /// Helper to parse a numeric component with better error messages
    fn parse_part<T: FromStr>(s: &str) -> Result<T, CalendarError> {
        s.parse::<T>().map_err(|_| CalendarError::InvalidFormat(s.to_owned()))
    }
}

impl fmt::Display for Date {
    /// Years before year zero get a leading `-` ahead of the zero-padded magnitude.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.year < 0 { "-" } else { "" };
        write!(f, "{sign}{:04}-{:02}-{:02}", self.year.unsigned_abs(), self.month.get(), self.day.get())
    }
}

impl FromStr for Date {
    type Err = CalendarError;

    /// Parses `YYYY-MM-DD`. A leading `-` marks a year before year zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CalendarError::InvalidFormat("empty date string".to_owned()));
        }

        let (negative, unsigned) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let parts: Vec<&str> = unsigned.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(CalendarError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {trimmed}"
            )));
        };

        // Parse components - InvalidFormat if not numeric
        let year = if negative {
            Self::parse_part::<i32>(&format!("{DATE_SEPARATOR}{year}"))?
        } else {
            Self::parse_part::<i32>(year)?
        };
        let month = Self::parse_part::<u8>(month)?;
        let day = Self::parse_part::<u8>(day)?;

        Self::new(year, month, day)
    }
}

impl TryFrom<(i32, u8, u8)> for Date {
    type Error = CalendarError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
