//! Display names for weekdays and months.

use serde::{Deserialize, Serialize};

use crate::consts::{DAYS_IN_WEEK, MAX_MONTH};
use crate::types::{Month, Weekday};
use crate::CalendarError;

const MONTHS: usize = MAX_MONTH as usize;

/// Weekday and month names used by the renderers.
///
/// Weekday tables are ordered Monday first. A locale can only be built through
/// [`Locale::new`] (or deserialized, which runs the same checks), so lookups
/// never fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LocaleTables", into = "LocaleTables")]
pub struct Locale {
    day_names:   [String; DAYS_IN_WEEK],
    day_abbrs:   [String; DAYS_IN_WEEK],
    month_names: [String; MONTHS],
    month_abbrs: [String; MONTHS],
}

/// Unchecked wire form of a [`Locale`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LocaleTables {
    day_names:   Vec<String>,
    day_abbrs:   Vec<String>,
    month_names: Vec<String>,
    month_abbrs: Vec<String>,
}

impl Locale {
    /// Builds a locale from name tables.
    ///
    /// Weekday tables need exactly 7 entries starting with Monday. Month
    /// tables need 12 entries starting with January, or 13 whose first entry
    /// is an empty placeholder.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidLocale` if any table has the wrong length.
    pub fn new(
        day_names: impl IntoIterator<Item = impl Into<String>>,
        day_abbrs: impl IntoIterator<Item = impl Into<String>>,
        month_names: impl IntoIterator<Item = impl Into<String>>,
        month_abbrs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, CalendarError> {
        Ok(Self {
            day_names:   weekday_table("day_names", collect(day_names))?,
            day_abbrs:   weekday_table("day_abbrs", collect(day_abbrs))?,
            month_names: month_table("month_names", collect(month_names))?,
            month_abbrs: month_table("month_abbrs", collect(month_abbrs))?,
        })
    }

    /// English names, the default locale
    pub fn english() -> Self {
        Self {
            day_names:   ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
                .map(String::from),
            day_abbrs:   ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"].map(String::from),
            month_names: [
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
            ]
            .map(String::from),
            month_abbrs: ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
                .map(String::from),
        }
    }

    pub fn day_name(&self, weekday: Weekday) -> &str {
        &self.day_names[usize::from(weekday.number())]
    }

    pub fn day_abbr(&self, weekday: Weekday) -> &str {
        &self.day_abbrs[usize::from(weekday.number())]
    }

    pub fn month_name(&self, month: Month) -> &str {
        &self.month_names[month.index()]
    }

    pub fn month_abbr(&self, month: Month) -> &str {
        &self.month_abbrs[month.index()]
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

impl TryFrom<LocaleTables> for Locale {
    type Error = CalendarError;

    fn try_from(tables: LocaleTables) -> Result<Self, Self::Error> {
        Self::new(tables.day_names, tables.day_abbrs, tables.month_names, tables.month_abbrs)
    }
}

impl From<Locale> for LocaleTables {
    fn from(locale: Locale) -> Self {
        Self {
            day_names:   locale.day_names.into(),
            day_abbrs:   locale.day_abbrs.into(),
            month_names: locale.month_names.into(),
            month_abbrs: locale.month_abbrs.into(),
        }
    }
}

fn collect(names: impl IntoIterator<Item = impl Into<String>>) -> Vec<String> {
    names.into_iter().map(Into::into).collect()
}

fn weekday_table(table: &str, names: Vec<String>) -> Result<[String; DAYS_IN_WEEK], CalendarError> {
    let found = names.len();
    names.try_into().map_err(|_| CalendarError::InvalidLocale {
        reason: format!("{table} needs {DAYS_IN_WEEK} entries, found {found}"),
    })
}

fn month_table(table: &str, mut names: Vec<String>) -> Result<[String; MONTHS], CalendarError> {
    let found = names.len();
    // 1-based tables carry an empty slot for month 0
    if found == MONTHS + 1 && names[0].is_empty() {
        names.remove(0);
    }
    names.try_into().map_err(|_| CalendarError::InvalidLocale {
        reason: format!("{table} needs {MONTHS} entries, found {found}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn german() -> Result<Locale, CalendarError> {
        Locale::new(
            ["Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag", "Sonntag"],
            ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"],
            [
                "Januar",
                "Februar",
                "März",
                "April",
                "Mai",
                "Juni",
                "Juli",
                "August",
                "September",
                "Oktober",
                "November",
                "Dezember",
            ],
            ["Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez"],
        )
    }

    #[test]
    fn test_english_lookups() {
        let locale = Locale::english();
        assert_eq!(locale.day_name(Weekday::Monday), "Monday");
        assert_eq!(locale.day_abbr(Weekday::Sunday), "Sun");
        assert_eq!(locale.month_name(Month::new(2).unwrap()), "February");
        assert_eq!(locale.month_abbr(Month::new(12).unwrap()), "Dec");
        assert_eq!(Locale::default(), locale);
    }

    #[test]
    fn test_custom_locale() {
        let locale = german().unwrap();
        assert_eq!(locale.day_name(Weekday::Thursday), "Donnerstag");
        assert_eq!(locale.month_name(Month::new(3).unwrap()), "März");
    }

    #[test]
    fn test_one_based_month_table_accepted() {
        let months = ["", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];
        let english = Locale::english();
        let locale = Locale::new(
            Weekday::ALL.map(|weekday| english.day_name(weekday).to_owned()),
            Weekday::ALL.map(|weekday| english.day_abbr(weekday).to_owned()),
            months,
            months,
        )
        .unwrap();
        assert_eq!(locale.month_name(Month::new(1).unwrap()), "Jan");
        assert_eq!(locale.month_name(Month::new(12).unwrap()), "Dec");
    }

    #[test]
    fn test_wrong_lengths_rejected() {
        struct TestCase {
            day_names:   usize,
            month_names: usize,
            description: &'static str,
        }

        let cases = [
            TestCase {
                day_names:   6,
                month_names: 12,
                description: "too few weekdays",
            },
            TestCase {
                day_names:   8,
                month_names: 12,
                description: "too many weekdays",
            },
            TestCase {
                day_names:   7,
                month_names: 2,
                description: "too few months",
            },
            TestCase {
                day_names:   7,
                month_names: 13,
                description: "13 months without an empty placeholder",
            },
        ];

        for case in &cases {
            let result = Locale::new(
                vec!["d"; case.day_names],
                vec!["d"; 7],
                vec!["m"; case.month_names],
                vec!["m"; 12],
            );
            assert!(
                matches!(result, Err(CalendarError::InvalidLocale { .. })),
                "Expected rejection for: {}",
                case.description
            );
        }
    }

    #[test]
    fn test_rejection_names_the_table() {
        let err = Locale::new(vec!["d"; 7], vec!["d"; 7], vec!["m"; 12], vec!["m"; 3]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid locale: month_abbrs needs 12 entries, found 3"
        );
    }

    #[test]
    fn test_serde_round_trip_and_validation() {
        let locale = german().unwrap();
        let json = serde_json::to_string(&locale).unwrap();
        let parsed: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, locale);

        let short = r#"{"day_names":["a"],"day_abbrs":["a"],"month_names":["b"],"month_abbrs":["b"]}"#;
        assert!(serde_json::from_str::<Locale>(short).is_err());
    }
}
