use crate::CalendarError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_IN_WEEK, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_DAY, MAX_MONTH,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

/// Month of the year, 1 (January) through 12 (December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` outside `1..=12`; months are never clamped.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        let non_zero = NonZeroU8::new(value).ok_or(CalendarError::InvalidMonth { month: value })?;
        if value > MAX_MONTH {
            return Err(CalendarError::InvalidMonth { month: value });
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Zero-based position of the month within the year
    #[inline]
    pub const fn index(self) -> usize {
        self.0.get() as usize - 1
    }

    /// Number of days this month has in `year`
    pub const fn length(self, year: i32) -> u8 {
        if self.0.get() == FEBRUARY && is_leap_year(year) {
            FEBRUARY_DAYS_LEAP
        } else {
            DAYS_IN_MONTH[self.0.get() as usize]
        }
    }

    /// January through December, in order
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=MAX_MONTH).filter_map(NonZeroU8::new).map(Self)
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the month. Construction through [`Day::new`] checks it against
/// the length of its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the month is out of range and
    /// `CalendarError::InvalidDay` if the day does not exist in that month.
    pub fn new(value: u8, year: i32, month: u8) -> Result<Self, CalendarError> {
        let max_day = Month::new(month)?.length(year);
        let invalid = CalendarError::InvalidDay {
            year,
            month,
            day: value,
        };

        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if value > max_day {
            return Err(invalid);
        }

        Ok(Self(non_zero))
    }

    /// Wraps a day number already known to lie inside its month.
    pub(crate) const fn from_non_zero(value: NonZeroU8) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = CalendarError;

    /// Accepts `1..=31`. Without a year and month only the longest month can be checked.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let invalid = CalendarError::InvalidDay {
            year:  0,
            month: 0,
            day:   value,
        };
        match NonZeroU8::new(value) {
            Some(non_zero) if value <= MAX_DAY => Ok(Self(non_zero)),
            _ => Err(invalid),
        }
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the week, numbered from Monday = 0 to Sunday = 6.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Weekday {
    #[default]
    Monday = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
    Saturday = 5,
    Sunday = 6,
}

impl Weekday {
    /// Monday through Sunday, in number order
    pub const ALL: [Self; DAYS_IN_WEEK] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Looks up a weekday by number (Monday = 0).
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidWeekday` if `value` is not in `0..=6`.
    pub fn from_number(value: u8) -> Result<Self, CalendarError> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(CalendarError::InvalidWeekday { weekday: value })
    }

    /// Number of this weekday, Monday = 0
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// The weekday `days` after this one, wrapping around the week.
    pub const fn add_days(self, days: usize) -> Self {
        Self::ALL[(self as usize + days % DAYS_IN_WEEK) % DAYS_IN_WEEK]
    }

    /// Days to move forward from `start` to reach this weekday (0..=6).
    pub const fn days_since(self, start: Self) -> usize {
        (self as usize + DAYS_IN_WEEK - start as usize) % DAYS_IN_WEEK
    }

    /// The seven weekdays in display order when weeks begin on this day.
    pub fn week_from(self) -> [Self; DAYS_IN_WEEK] {
        std::array::from_fn(|column| self.add_days(column))
    }
}

impl TryFrom<u8> for Weekday {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(value)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.number()
    }
}

impl FromStr for Weekday {
    type Err = CalendarError;

    /// Accepts English names and three-letter abbreviations, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|weekday| {
                let name = weekday.to_string().to_ascii_lowercase();
                name == wanted || (wanted.len() == 3 && name.starts_with(&wanted))
            })
            .ok_or_else(|| CalendarError::InvalidFormat(s.to_owned()))
    }
}

// Helper functions

/// Proleptic Gregorian leap year rule, valid for any year including zero and negatives.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}
