//! Renderer configuration and the process-wide active snapshot.
//!
//! Renderers hold their own [`CalendarConfig`]. The active snapshot only
//! supplies the value picked up by `TextCalendar::default()` and
//! `HtmlCalendar::default()`; writers replace it whole, so a reader sees
//! either the old configuration or the new one.

use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::locale::Locale;
use crate::types::Weekday;
use crate::CalendarError;

/// First weekday and name tables shared by the renderers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    first_weekday: Weekday,
    locale:        Arc<Locale>,
}

impl CalendarConfig {
    pub fn new(first_weekday: Weekday, locale: Locale) -> Self {
        Self {
            first_weekday,
            locale: Arc::new(locale),
        }
    }

    pub const fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Same configuration with weeks starting on `first_weekday`.
    #[must_use]
    pub fn with_first_weekday(self, first_weekday: Weekday) -> Self {
        Self { first_weekday, ..self }
    }

    /// Same configuration with weeks starting on weekday number `first_weekday` (Monday = 0).
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidWeekday` if `first_weekday` is not in `0..=6`.
    pub fn try_with_first_weekday(self, first_weekday: u8) -> Result<Self, CalendarError> {
        Ok(self.with_first_weekday(Weekday::from_number(first_weekday)?))
    }

    /// Same configuration with a different locale.
    #[must_use]
    pub fn with_locale(self, locale: Locale) -> Self {
        Self {
            locale: Arc::new(locale),
            ..self
        }
    }
}

static ACTIVE: LazyLock<RwLock<Arc<CalendarConfig>>> =
    LazyLock::new(|| RwLock::new(Arc::new(CalendarConfig::default())));

/// Snapshot of the process-wide configuration.
pub fn active_config() -> Arc<CalendarConfig> {
    // The slot always holds a complete snapshot, so a poisoned lock is still usable
    Arc::clone(&ACTIVE.read().unwrap_or_else(PoisonError::into_inner))
}

/// Replaces the process-wide configuration.
pub fn set_active_config(config: CalendarConfig) {
    update_active(|_| config);
}

/// Sets the process-wide first weekday by number (Monday = 0).
///
/// # Errors
/// Returns `CalendarError::InvalidWeekday` if `first_weekday` is not in
/// `0..=6`; the active configuration is left unchanged.
pub fn set_first_weekday(first_weekday: u8) -> Result<(), CalendarError> {
    let first_weekday = Weekday::from_number(first_weekday).inspect_err(|err| {
        warn!(%err, "rejected first weekday");
    })?;
    update_active(|current| current.clone().with_first_weekday(first_weekday));
    Ok(())
}

/// Sets the process-wide locale from name tables.
///
/// The tables are checked as in [`Locale::new`] before anything is replaced.
///
/// # Errors
/// Returns `CalendarError::InvalidLocale` if any table has the wrong length;
/// the active configuration is left unchanged.
pub fn set_locale(
    day_names: impl IntoIterator<Item = impl Into<String>>,
    day_abbrs: impl IntoIterator<Item = impl Into<String>>,
    month_names: impl IntoIterator<Item = impl Into<String>>,
    month_abbrs: impl IntoIterator<Item = impl Into<String>>,
) -> Result<(), CalendarError> {
    let locale = Locale::new(day_names, day_abbrs, month_names, month_abbrs).inspect_err(|err| {
        warn!(%err, "rejected locale");
    })?;
    update_active(|current| current.clone().with_locale(locale));
    Ok(())
}

fn update_active(change: impl FnOnce(&CalendarConfig) -> CalendarConfig) {
    let mut slot = ACTIVE.write().unwrap_or_else(PoisonError::into_inner);
    let next = change(&slot);
    debug!(first_weekday = %next.first_weekday, "active calendar configuration replaced");
    *slot = Arc::new(next);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_monday_english() {
        let config = CalendarConfig::default();
        assert_eq!(config.first_weekday(), Weekday::Monday);
        assert_eq!(config.locale(), &Locale::english());
    }

    #[test]
    fn test_with_methods_build_new_values() {
        let base = CalendarConfig::default();
        let sunday = base.clone().with_first_weekday(Weekday::Sunday);
        assert_eq!(base.first_weekday(), Weekday::Monday);
        assert_eq!(sunday.first_weekday(), Weekday::Sunday);
        assert_eq!(sunday.locale(), base.locale());
    }

    #[test]
    fn test_try_with_first_weekday() {
        let config = CalendarConfig::default().try_with_first_weekday(6).unwrap();
        assert_eq!(config.first_weekday(), Weekday::Sunday);

        let result = CalendarConfig::default().try_with_first_weekday(7);
        assert!(matches!(result, Err(CalendarError::InvalidWeekday { weekday: 7 })));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: CalendarConfig = serde_json::from_str(r#"{"first_weekday": 6}"#).unwrap();
        assert_eq!(config.first_weekday(), Weekday::Sunday);
        assert_eq!(config.locale(), &Locale::english());

        let config: CalendarConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CalendarConfig::default());
    }

    #[test]
    fn test_deserialize_rejects_bad_values() {
        assert!(serde_json::from_str::<CalendarConfig>(r#"{"first_weekday": 7}"#).is_err());
        assert!(serde_json::from_str::<CalendarConfig>(r#"{"first_day": 1}"#).is_err());
        let short_locale = r#"{"locale": {"day_names": [], "day_abbrs": [], "month_names": [], "month_abbrs": []}}"#;
        assert!(serde_json::from_str::<CalendarConfig>(short_locale).is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let config = CalendarConfig::default().with_first_weekday(Weekday::Wednesday);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: CalendarConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    // The only unit test that touches the process-wide snapshot.
    #[test]
    fn test_active_config_updates_are_atomic() {
        let before = active_config();

        set_first_weekday(6).unwrap();
        assert_eq!(active_config().first_weekday(), Weekday::Sunday);
        // Snapshots taken earlier are unaffected
        assert_eq!(before.first_weekday(), Weekday::Monday);

        assert!(matches!(set_first_weekday(9), Err(CalendarError::InvalidWeekday { weekday: 9 })));
        assert_eq!(active_config().first_weekday(), Weekday::Sunday);

        let result = set_locale(vec!["d"; 7], vec!["d"; 7], ["January", "February"], vec!["m"; 12]);
        assert!(matches!(result, Err(CalendarError::InvalidLocale { .. })));
        assert_eq!(active_config().locale(), &Locale::english());

        set_active_config(CalendarConfig::default());
        assert_eq!(*active_config(), CalendarConfig::default());
    }
}
