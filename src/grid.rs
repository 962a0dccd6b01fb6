//! Week-by-weekday matrix for one month.

use std::iter;
use std::num::NonZeroU8;

use serde::Serialize;
use tracing::trace;

use crate::consts::DAYS_IN_WEEK;
use crate::math::month_range_of;
use crate::prelude::*;
use crate::types::{Day, Month, Weekday};
use crate::CalendarError;

/// One displayed week. A cell is `None` where its column falls outside the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deref, From, Into, Serialize)]
pub struct Week([Option<Day>; DAYS_IN_WEEK]);

impl Week {
    /// The seven cells, in display order
    pub const fn cells(&self) -> &[Option<Day>; DAYS_IN_WEEK] {
        &self.0
    }

    /// Days present in this week, in order
    pub fn days(&self) -> impl Iterator<Item = Day> + '_ {
        self.0.iter().flatten().copied()
    }

    /// Number of sentinel cells
    pub fn padding(&self) -> usize {
        self.0.iter().filter(|cell| cell.is_none()).count()
    }
}

/// The weeks of a month laid out from a chosen first weekday.
///
/// Every week has seven cells. The days of the month appear once each in
/// row-major order; only the first week has leading padding and only the last
/// has trailing padding. There are `ceil((shift + days) / 7)` weeks, so a grid
/// never ends with an empty week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    year:          i32,
    month:         Month,
    first_weekday: Weekday,
    shift:         usize,
    weeks:         Vec<Week>,
}

impl MonthGrid {
    /// Lays out `month` of `year` with weeks starting on `first_weekday`.
    pub fn build(year: i32, month: Month, first_weekday: Weekday) -> Self {
        let (start, length) = month_range_of(year, month);
        let shift = start.days_since(first_weekday);

        let cells: Vec<Option<Day>> = iter::repeat_n(None, shift)
            .chain((1..=length).filter_map(NonZeroU8::new).map(|day| Some(Day::from_non_zero(day))))
            .collect();

        let weeks: Vec<Week> = cells
            .chunks(DAYS_IN_WEEK)
            .map(|chunk| {
                let mut week = [None; DAYS_IN_WEEK];
                week[..chunk.len()].copy_from_slice(chunk);
                Week(week)
            })
            .collect();

        trace!(year, month = month.get(), %first_weekday, shift, weeks = weeks.len(), "built month grid");

        Self {
            year,
            month,
            first_weekday,
            shift,
            weeks,
        }
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    /// Leading sentinel cells in the first week
    pub const fn shift(&self) -> usize {
        self.shift
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Number of weeks (4, 5 or 6)
    pub fn rows(&self) -> usize {
        self.weeks.len()
    }

    /// Weekday shown in `column` (0..7) of this grid.
    pub const fn weekday_at(&self, column: usize) -> Weekday {
        self.first_weekday.add_days(column)
    }

    /// Every day of the month in row-major order.
    pub fn days(&self) -> impl Iterator<Item = Day> + '_ {
        self.weeks.iter().flat_map(Week::days)
    }
}

/// Builds the grid for `month` of `year` with weeks starting on `first_weekday`.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` if `month` is not in `1..=12`.
pub fn month_grid(year: i32, month: u8, first_weekday: Weekday) -> Result<MonthGrid, CalendarError> {
    Ok(MonthGrid::build(year, Month::new(month)?, first_weekday))
}
