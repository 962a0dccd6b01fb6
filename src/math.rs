//! Leap years, weekdays and month lengths on the proleptic Gregorian calendar.

use crate::consts::{
    CENTURY_CYCLE, DAYS_PER_GREGORIAN_CYCLE, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, UNIX_EPOCH_OFFSET, UNIX_EPOCH_WEEKDAY,
};
use crate::types::{Day, Month, Weekday};
use crate::CalendarError;

/// Leap days between the starts of `start` and `end`.
///
/// Computed as `f(end) - f(start)` with `f(y) = y/4 - y/100 + y/400` and
/// truncating division. For non-negative years this is the number of leap
/// years in `start + 1..=end`; it goes negative when `end < start`.
pub const fn count_leap_years(start: i32, end: i32) -> i32 {
    const fn leaps_through(y: i32) -> i32 {
        y / LEAP_YEAR_CYCLE - y / CENTURY_CYCLE + y / GREGORIAN_CYCLE
    }
    leaps_through(end) - leaps_through(start)
}

/// Days from 1970-01-01 to the given civil date.
///
/// The year is shifted to start in March so the leap day falls at the end,
/// then counted in whole 400-year eras.
pub(crate) const fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let year = if month <= 2 { year as i64 - 1 } else { year as i64 };
    let era = year.div_euclid(GREGORIAN_CYCLE as i64);
    let year_of_era = year.rem_euclid(GREGORIAN_CYCLE as i64);
    let march_month = (month as i64 + 9) % 12;
    let day_of_year = (153 * march_month + 2) / 5 + day as i64 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_PER_GREGORIAN_CYCLE + day_of_era - UNIX_EPOCH_OFFSET
}

/// Weekday of an already validated date.
pub(crate) const fn weekday_of_valid(year: i32, month: Month, day: Day) -> Weekday {
    let days = days_from_civil(year, month.get(), day.get());
    // rem_euclid keeps the index in 0..7 for dates before the epoch
    Weekday::ALL[(days + UNIX_EPOCH_WEEKDAY).rem_euclid(7) as usize]
}

/// Day of the week for a calendar date.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` or `CalendarError::InvalidDay` when
/// the date does not exist.
pub fn weekday_of(year: i32, month: u8, day: u8) -> Result<Weekday, CalendarError> {
    let day = Day::new(day, year, month)?;
    let month = Month::new(month)?;
    Ok(weekday_of_valid(year, month, day))
}

/// Number of days in `month` of `year`.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` if `month` is not in `1..=12`.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    Ok(Month::new(month)?.length(year))
}

/// Weekday of the first day of the month and the number of days in it.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` if `month` is not in `1..=12`.
pub fn month_range(year: i32, month: u8) -> Result<(Weekday, u8), CalendarError> {
    let month = Month::new(month)?;
    Ok(month_range_of(year, month))
}

pub(crate) const fn month_range_of(year: i32, month: Month) -> (Weekday, u8) {
    let first = Day::from_non_zero(std::num::NonZeroU8::MIN);
    (weekday_of_valid(year, month, first), month.length(year))
}
