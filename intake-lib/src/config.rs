//! Validation configuration

use chrono::{Local, NaiveDate};

/// Default oldest accepted age for a date of birth, in years.
pub const DEFAULT_MAX_AGE_YEARS: u32 = 120;

/// Settings shared by every validator run.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use intake_lib::ValidationConfig;
///
/// let config = ValidationConfig::default()
///     .with_today(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
/// assert_eq!(config.today(), NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Fixed "today" for date checks. `None` reads the local clock.
    pub today: Option<NaiveDate>,

    /// Oldest accepted date of birth, in years before today.
    ///
    /// Default: 120
    pub max_age_years: u32,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            today: None,
            max_age_years: DEFAULT_MAX_AGE_YEARS,
        }
    }
}

impl ValidationConfig {
    /// Pins the date used as "today".
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Sets the maximum accepted age.
    pub fn with_max_age_years(mut self, years: u32) -> Self {
        self.max_age_years = years;
        self
    }

    /// The effective current date.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}
