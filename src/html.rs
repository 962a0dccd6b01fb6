//! HTML table calendars.

use tracing::debug;

use crate::config::{CalendarConfig, active_config};
use crate::consts::DAYS_IN_WEEK;
use crate::grid::MonthGrid;
use crate::holiday::HolidayRegistry;
use crate::text::months_per_row_or_default;
use crate::types::{Month, Weekday};
use crate::{CalendarError, Date};

const TABLE_ATTRS: &str = r#"border="0" cellpadding="0" cellspacing="0""#;
const NO_DAY_CELL: &str = r#"<td class="noday">&nbsp;</td>"#;

/// Renders months and years as `<table>` markup.
///
/// Header and day cells carry a class naming their weekday (`mon` .. `sun`);
/// padding cells use `noday`. Days found in the holiday registry also get
/// the `holiday` class and a `title` with the label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlCalendar {
    config:   CalendarConfig,
    holidays: HolidayRegistry,
}

impl Default for HtmlCalendar {
    /// Uses a snapshot of the active configuration.
    fn default() -> Self {
        Self::new(CalendarConfig::clone(&active_config()))
    }
}

impl HtmlCalendar {
    pub fn new(config: CalendarConfig) -> Self {
        Self {
            config,
            holidays: HolidayRegistry::new(),
        }
    }

    #[must_use]
    pub fn with_holidays(self, holidays: HolidayRegistry) -> Self {
        Self { holidays, ..self }
    }

    pub const fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub const fn holidays(&self) -> &HolidayRegistry {
        &self.holidays
    }

    /// One month as a table; `with_year` adds the year to the title.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if `month` is not in `1..=12`.
    pub fn render_month_table(&self, year: i32, month: u8, with_year: bool) -> Result<String, CalendarError> {
        Ok(self.month_table(year, Month::new(month)?, with_year))
    }

    /// The whole year, `months_per_row` months per table row (`0` for the default of 3, at most 12).
    pub fn render_year_table(&self, year: i32, months_per_row: usize) -> String {
        let per_row = months_per_row_or_default(months_per_row);
        if per_row != months_per_row {
            debug!(requested = months_per_row, used = per_row, "adjusted months per row");
        }

        let mut out = format!("<table {TABLE_ATTRS} class=\"year\">\n");
        out.push_str(&format!(
            "<tr><th colspan=\"{}\" class=\"year\">{year}</th></tr>\n",
            per_row * DAYS_IN_WEEK
        ));
        let months: Vec<Month> = Month::all().collect();
        for band in months.chunks(per_row) {
            out.push_str("<tr>");
            for &month in band {
                out.push_str("<td valign=\"top\">");
                out.push_str(&self.month_table(year, month, false));
                out.push_str("</td>");
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</table>");
        out
    }

    fn month_table(&self, year: i32, month: Month, with_year: bool) -> String {
        let locale = self.config.locale();
        let grid = MonthGrid::build(year, month, self.config.first_weekday());

        let mut title = escape(locale.month_name(month));
        if with_year {
            title.push_str(&format!(" {year}"));
        }

        let mut out = format!("<table {TABLE_ATTRS} class=\"month\">\n");
        out.push_str(&format!(
            "<tr><th colspan=\"{DAYS_IN_WEEK}\" class=\"month\">{title}</th></tr>\n"
        ));

        out.push_str("<tr>");
        for weekday in self.config.first_weekday().week_from() {
            out.push_str(&format!(
                "<th class=\"{}\">{}</th>",
                css_class(weekday),
                escape(locale.day_abbr(weekday))
            ));
        }
        out.push_str("</tr>\n");

        for week in grid.weeks() {
            out.push_str("<tr>");
            for (column, cell) in week.cells().iter().enumerate() {
                let Some(day) = cell else {
                    out.push_str(NO_DAY_CELL);
                    continue;
                };
                let class = css_class(grid.weekday_at(column));
                let date = Date::from_parts(year, month, *day);
                match self.holidays.get(&date) {
                    Some(label) => out.push_str(&format!(
                        "<td class=\"{class} holiday\" title=\"{}\">{day}</td>",
                        escape(label)
                    )),
                    None => out.push_str(&format!("<td class=\"{class}\">{day}</td>")),
                }
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</table>");
        out
    }
}

const fn css_class(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "mon",
        Weekday::Tuesday => "tue",
        Weekday::Wednesday => "wed",
        Weekday::Thursday => "thu",
        Weekday::Friday => "fri",
        Weekday::Saturday => "sat",
        Weekday::Sunday => "sun",
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
