//! Trailing date windows selectable on the progress dashboard.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Window used for metric cards and chart series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateRangeKey {
    #[serde(rename = "7days")]
    Last7Days,
    #[default]
    #[serde(rename = "30days")]
    Last30Days,
    #[serde(rename = "90days")]
    Last90Days,
    /// Capped at 90 days rather than the full history.
    #[serde(rename = "all")]
    All,
}

impl DateRangeKey {
    /// Number of calendar days covered, inclusive of today.
    pub fn days(self) -> u32 {
        match self {
            Self::Last7Days => 7,
            Self::Last30Days => 30,
            Self::Last90Days | Self::All => 90,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Last7Days => "7days",
            Self::Last30Days => "30days",
            Self::Last90Days => "90days",
            Self::All => "all",
        }
    }

    /// The window ending on `today`, in ascending order.
    pub fn window(self, today: NaiveDate) -> DateWindow {
        let start = today - Duration::days(i64::from(self.days()) - 1);
        DateWindow { start, end: today }
    }
}

impl fmt::Display for DateRangeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateRangeKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7days" => Ok(Self::Last7Days),
            "30days" => Ok(Self::Last30Days),
            "90days" => Ok(Self::Last90Days),
            "all" => Ok(Self::All),
            other => Err(AppError::Validation(format!(
                "Unknown date range '{other}', expected one of 7days, 30days, 90days, all"
            ))),
        }
    }
}

/// Inclusive calendar-day range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every day in the window, ascending.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn all_is_capped_at_ninety_days() {
        assert_eq!(DateRangeKey::All.days(), 90);
        assert_eq!(DateRangeKey::Last7Days.days(), 7);
    }

    #[test]
    fn window_is_inclusive_and_ascending() {
        let window = DateRangeKey::Last7Days.window(day(2025, 3, 2));
        let days: Vec<_> = window.days().collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days.first(), Some(&day(2025, 2, 24)));
        assert_eq!(days.last(), Some(&day(2025, 3, 2)));
        assert!(window.contains(day(2025, 2, 24)));
        assert!(!window.contains(day(2025, 2, 23)));
        assert!(!window.contains(day(2025, 3, 3)));
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("90days".parse::<DateRangeKey>().unwrap(), DateRangeKey::Last90Days);
        assert_eq!(DateRangeKey::All.to_string(), "all");
        assert!("6months".parse::<DateRangeKey>().is_err());
    }

    #[test]
    fn serde_uses_wire_keys() {
        let key: DateRangeKey = serde_json::from_str("\"7days\"").unwrap();
        assert_eq!(key, DateRangeKey::Last7Days);
        assert_eq!(serde_json::to_string(&DateRangeKey::All).unwrap(), "\"all\"");
    }
}
