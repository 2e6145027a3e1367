//! Signal sources behind the dashboard metrics that are not derived from the
//! routine log.
//!
//! Routine score, skin improvement and product effectiveness will come from
//! photo analysis and product ratings. Until those exist the aggregator is
//! driven by [`PlaceholderScores`], which returns fixed values so the
//! dashboard shape can be exercised end to end.

use chrono::{Datelike, NaiveDate};

use crate::models::date_range::DateWindow;
use crate::models::user_data::UserData;

/// Values of the previous period that metric changes are measured against.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricBaseline {
    pub consistency: f64,
    pub routine_score: f64,
    pub skin_improvement: f64,
    pub product_effectiveness: f64,
}

/// Provider of the non-adherence dashboard signals.
pub trait ScoreSource: Send + Sync {
    /// Overall routine score on a 0-10 scale.
    fn routine_score(&self, user: &UserData, window: DateWindow) -> f64;

    /// Skin improvement in percent.
    fn skin_improvement(&self, user: &UserData, window: DateWindow) -> f64;

    /// Product effectiveness on a 0-10 scale.
    fn product_effectiveness(&self, user: &UserData, window: DateWindow) -> f64;

    /// Skin-concern chart value for a logged day.
    fn skin_concern(&self, user: &UserData, date: NaiveDate) -> f64;

    /// Baseline for the change column of the metric cards.
    fn previous_period(&self, user: &UserData, window: DateWindow) -> MetricBaseline;
}

/// Fixed stand-in values. The previous period is all zeros, so every change
/// equals the current value.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderScores;

impl PlaceholderScores {
    pub const ROUTINE_SCORE: f64 = 8.4;
    pub const SKIN_IMPROVEMENT: f64 = 76.0;
    pub const PRODUCT_EFFECTIVENESS: f64 = 9.1;
}

impl ScoreSource for PlaceholderScores {
    fn routine_score(&self, _user: &UserData, _window: DateWindow) -> f64 {
        Self::ROUTINE_SCORE
    }

    fn skin_improvement(&self, _user: &UserData, _window: DateWindow) -> f64 {
        Self::SKIN_IMPROVEMENT
    }

    fn product_effectiveness(&self, _user: &UserData, _window: DateWindow) -> f64 {
        Self::PRODUCT_EFFECTIVENESS
    }

    /// Value in [70, 80) spread by calendar day, stable across calls.
    fn skin_concern(&self, _user: &UserData, date: NaiveDate) -> f64 {
        let spread = (i64::from(date.num_days_from_ce()) * 37).rem_euclid(100);
        70.0 + spread as f64 / 10.0
    }

    fn previous_period(&self, _user: &UserData, _window: DateWindow) -> MetricBaseline {
        MetricBaseline::default()
    }
}
