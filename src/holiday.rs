//! Labels attached to individual dates.

use std::collections::BTreeMap;
use std::num::NonZeroU8;

use serde::{Deserialize, Serialize};

use crate::types::{Day, Month};
use crate::Date;

/// Date-to-label map the HTML renderer uses to tag day cells.
///
/// Serializes as an object keyed by `YYYY-MM-DD` strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidayRegistry {
    holidays: BTreeMap<Date, String>,
}

impl HolidayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels `date`, returning the label it replaced.
    pub fn insert(&mut self, date: Date, label: impl Into<String>) -> Option<String> {
        self.holidays.insert(date, label.into())
    }

    pub fn get(&self, date: &Date) -> Option<&str> {
        self.holidays.get(date).map(String::as_str)
    }

    pub fn remove(&mut self, date: &Date) -> Option<String> {
        self.holidays.remove(date)
    }

    pub fn clear(&mut self) {
        self.holidays.clear();
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// All entries in date order
    pub fn iter(&self) -> impl Iterator<Item = (&Date, &str)> {
        self.holidays.iter().map(|(date, label)| (date, label.as_str()))
    }

    /// Entries falling in `month` of `year`, in date order.
    pub fn in_month(&self, year: i32, month: Month) -> impl Iterator<Item = (&Date, &str)> {
        let first = Date::from_parts(year, month, Day::from_non_zero(NonZeroU8::MIN));
        let last = NonZeroU8::new(month.length(year))
            .map_or(first, |day| Date::from_parts(year, month, Day::from_non_zero(day)));
        self.holidays
            .range(first..=last)
            .map(|(date, label)| (date, label.as_str()))
    }
}

impl FromIterator<(Date, String)> for HolidayRegistry {
    fn from_iter<I: IntoIterator<Item = (Date, String)>>(iter: I) -> Self {
        Self {
            holidays: iter.into_iter().collect(),
        }
    }
}

impl Extend<(Date, String)> for HolidayRegistry {
    fn extend<I: IntoIterator<Item = (Date, String)>>(&mut self, iter: I) {
        self.holidays.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    #[test]
    fn test_insert_get_remove_clear() {
        let mut registry = HolidayRegistry::new();
        assert!(registry.is_empty());

        assert_eq!(registry.insert(date("2026-12-25"), "Christmas"), None);
        assert_eq!(registry.insert(date("2026-01-01"), "New Year"), None);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(&date("2026-12-25")), Some("Christmas"));
        assert_eq!(registry.get(&date("2026-12-24")), None);

        let replaced = registry.insert(date("2026-12-25"), "Christmas Day");
        assert_eq!(replaced.as_deref(), Some("Christmas"));
        assert_eq!(registry.len(), 2);

        assert_eq!(registry.remove(&date("2026-01-01")).as_deref(), Some("New Year"));
        assert_eq!(registry.len(), 1);

        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_in_month_bounds() {
        let registry: HolidayRegistry = [
            (date("2024-01-31"), "before".to_owned()),
            (date("2024-02-01"), "first".to_owned()),
            (date("2024-02-29"), "leap".to_owned()),
            (date("2024-03-01"), "after".to_owned()),
            (date("2025-02-14"), "other year".to_owned()),
        ]
        .into_iter()
        .collect();

        let february: Vec<&str> = registry
            .in_month(2024, Month::new(2).unwrap())
            .map(|(_, label)| label)
            .collect();
        assert_eq!(february, ["first", "leap"]);
    }

    #[test]
    fn test_iter_is_date_ordered() {
        let mut registry = HolidayRegistry::new();
        registry.extend([
            (date("2026-07-04"), "b".to_owned()),
            (date("2025-12-31"), "a".to_owned()),
            (date("2026-11-26"), "c".to_owned()),
        ]);
        let labels: Vec<&str> = registry.iter().map(|(_, label)| label).collect();
        assert_eq!(labels, ["a", "b", "c"]);
    }

    #[test]
    fn test_serde_object_keyed_by_date() {
        let mut registry = HolidayRegistry::new();
        registry.insert(date("2026-12-25"), "Christmas");
        let json = serde_json::to_string(&registry).unwrap();
        assert_eq!(json, r#"{"2026-12-25":"Christmas"}"#);

        let parsed: HolidayRegistry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, registry);

        assert!(serde_json::from_str::<HolidayRegistry>(r#"{"2026-02-30":"nope"}"#).is_err());
    }
}
