//! Fixed-width text calendars.

use tracing::debug;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::{CalendarConfig, active_config};
use crate::consts::{DAYS_IN_WEEK, DEFAULT_MONTHS_PER_ROW, MAX_MONTH, MIN_COLUMN_WIDTH, MONTH_COLUMN_SEPARATOR};
use crate::grid::{MonthGrid, Week};
use crate::types::Month;
use crate::CalendarError;

/// How many weeks of each month the year view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearWeeks {
    /// Every week, short months padded with blank lines
    #[default]
    All,
    /// Only the first week of each month (compact legacy layout)
    FirstOnly,
}

/// Renders months and years as aligned plain text.
///
/// Day numbers and weekday names are right-justified in their columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCalendar {
    config:     CalendarConfig,
    year_weeks: YearWeeks,
}

impl Default for TextCalendar {
    /// Uses a snapshot of the active configuration.
    fn default() -> Self {
        Self::new(CalendarConfig::clone(&active_config()))
    }
}

impl TextCalendar {
    pub const fn new(config: CalendarConfig) -> Self {
        Self {
            config,
            year_weeks: YearWeeks::All,
        }
    }

    pub const fn config(&self) -> &CalendarConfig {
        &self.config
    }

    #[must_use]
    pub fn with_year_weeks(mut self, year_weeks: YearWeeks) -> Self {
        self.year_weeks = year_weeks;
        self
    }

    /// Weekday abbreviations starting at the first weekday, each cut to
    /// `width` columns (at least 2) and right-justified.
    pub fn week_header(&self, width: usize) -> String {
        let width = width.max(MIN_COLUMN_WIDTH);
        let locale = self.config.locale();
        let names: Vec<String> = self
            .config
            .first_weekday()
            .week_from()
            .iter()
            .map(|&weekday| pad_left(truncate_to_width(locale.day_abbr(weekday), width), width))
            .collect();
        names.join(" ").trim_end().to_owned()
    }

    /// One month: centered title, week header, then one line per week.
    ///
    /// `lines` empty lines follow every week.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if `month` is not in `1..=12`.
    pub fn render_month(&self, year: i32, month: u8, width: usize, lines: usize) -> Result<String, CalendarError> {
        let month = Month::new(month)?;
        let width = self.column_width(width);
        let grid = MonthGrid::build(year, month, self.config.first_weekday());

        let title = format!("{} {year}", self.config.locale().month_name(month));
        let mut out = String::new();
        out.push_str(center(&title, block_width(width)).trim_end());
        out.push('\n');
        out.push_str(&self.week_header(width));
        out.push('\n');
        for week in grid.weeks() {
            out.push_str(&week_line(week, width));
            out.push('\n');
            out.push_str(&"\n".repeat(lines));
        }
        Ok(out)
    }

    /// All twelve months tiled `months_per_row` to a row.
    ///
    /// `0` selects the default of 3; anything above 12 is capped at 12.
    pub fn render_year(&self, year: i32, width: usize, months_per_row: usize) -> String {
        let per_row = months_per_row_or_default(months_per_row);
        if per_row != months_per_row {
            debug!(requested = months_per_row, used = per_row, "adjusted months per row");
        }
        let width = self.column_width(width);
        let block = block_width(width);
        let row_width = per_row * block + (per_row - 1) * MONTH_COLUMN_SEPARATOR.len();
        let locale = self.config.locale();

        let mut lines = vec![center(&year.to_string(), row_width).trim_end().to_owned(), String::new()];
        let months: Vec<Month> = Month::all().collect();
        for band in months.chunks(per_row) {
            let grids: Vec<MonthGrid> = band
                .iter()
                .map(|&month| MonthGrid::build(year, month, self.config.first_weekday()))
                .collect();

            lines.push(join_blocks(band.iter().map(|&month| center(locale.month_name(month), block))));
            lines.push(join_blocks(band.iter().map(|_| self.week_header(width))));

            let depth = match self.year_weeks {
                YearWeeks::All => grids.iter().map(MonthGrid::rows).max().unwrap_or(0),
                YearWeeks::FirstOnly => 1,
            };
            for index in 0..depth {
                lines.push(join_blocks(grids.iter().map(|grid| {
                    grid.weeks()
                        .get(index)
                        .map_or_else(|| " ".repeat(block), |week| week_line(week, width))
                })));
            }
            lines.push(String::new());
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// Prints [`TextCalendar::render_month`] to stdout.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if `month` is not in `1..=12`.
    pub fn print_month(&self, year: i32, month: u8, width: usize, lines: usize) -> Result<(), CalendarError> {
        print!("{}", self.render_month(year, month, width, lines)?);
        Ok(())
    }

    /// Prints [`TextCalendar::render_year`] to stdout with the default layout.
    pub fn print_year(&self, year: i32, width: usize) {
        print!("{}", self.render_year(year, width, DEFAULT_MONTHS_PER_ROW));
    }

    /// Column width for a month block: the requested width, but never
    /// narrower than the widest weekday abbreviation.
    fn column_width(&self, width: usize) -> usize {
        let locale = self.config.locale();
        let widest = self
            .config
            .first_weekday()
            .week_from()
            .iter()
            .map(|&weekday| locale.day_abbr(weekday).width())
            .max()
            .unwrap_or(0);
        width.max(MIN_COLUMN_WIDTH).max(widest)
    }
}

/// Months per row for a year view: `0` means the default, the rest is capped at twelve.
pub(crate) fn months_per_row_or_default(months_per_row: usize) -> usize {
    match months_per_row {
        0 => DEFAULT_MONTHS_PER_ROW,
        n => n.min(usize::from(MAX_MONTH)),
    }
}

const fn block_width(width: usize) -> usize {
    DAYS_IN_WEEK * (width + 1) - 1
}

fn week_line(week: &Week, width: usize) -> String {
    let cells: Vec<String> = week
        .cells()
        .iter()
        .map(|cell| match cell {
            Some(day) => format!("{:>width$}", day.get()),
            None => " ".repeat(width),
        })
        .collect();
    cells.join(" ")
}

fn join_blocks(blocks: impl Iterator<Item = String>) -> String {
    let blocks: Vec<String> = blocks.collect();
    blocks.join(MONTH_COLUMN_SEPARATOR).trim_end().to_owned()
}

/// Longest prefix of `text` that fits in `width` display columns.
fn truncate_to_width(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (index, ch) in text.char_indices() {
        used += ch.width().unwrap_or(0);
        if used > width {
            return &text[..index];
        }
    }
    text
}

fn pad_left(text: &str, width: usize) -> String {
    format!("{}{text}", " ".repeat(width.saturating_sub(text.width())))
}

/// `text` centered in exactly `width` columns (extra space goes on the right).
fn center(text: &str, width: usize) -> String {
    let free = width.saturating_sub(text.width());
    let left = free / 2;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(free - left))
}
