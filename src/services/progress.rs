//! Progress dashboard aggregation.
//!
//! Turns the user's routine, daily log and goals into the metric cards,
//! chart series, adherence calendar, goal list and insights shown on the
//! progress dashboard. Pure and synchronous: the input document is only
//! borrowed and identical inputs always produce identical output.
//!
//! Two date scopes are in play:
//! - the selected window (7/30/90 days ending today) drives metric cards,
//!   chart series and insights;
//! - the adherence calendar always covers every logged day.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};

use crate::models::dashboard::{
    ActionButton, AdherenceDay, AdherenceLevel, ChangeType, DashboardViewModel, GoalStatus,
    GoalSummary, GoalView, Insight, InsightPriority, InsightType, MetricCard, SeriesPoint,
};
use crate::models::date_range::{DateRangeKey, DateWindow};
use crate::models::user_data::{DayProgress, Goal, RecordId, UserData};
use crate::services::score_source::{PlaceholderScores, ScoreSource};

/// Consistency below this percentage triggers the reminder recommendation.
const CONSISTENCY_REMINDER_THRESHOLD: u32 = 75;

/// Aggregate with the current UTC date and placeholder score signals.
pub fn aggregate(user: Option<&UserData>, range: DateRangeKey) -> DashboardViewModel {
    ProgressAggregator::new(PlaceholderScores).aggregate(user, range, Utc::now().date_naive())
}

/// Dashboard aggregator parameterised over the source of non-adherence scores.
#[derive(Debug, Clone, Default)]
pub struct ProgressAggregator<S = PlaceholderScores> {
    scores: S,
}

impl<S: ScoreSource> ProgressAggregator<S> {
    pub fn new(scores: S) -> Self {
        Self { scores }
    }

    /// Build the dashboard for `range` ending on `today`.
    ///
    /// A missing document yields an empty view model; callers are expected
    /// to show a loading state in that case.
    pub fn aggregate(
        &self,
        user: Option<&UserData>,
        range: DateRangeKey,
        today: NaiveDate,
    ) -> DashboardViewModel {
        let Some(user) = user else {
            return DashboardViewModel::default();
        };

        let window = range.window(today);
        let in_range = progress_in_window(user, window);

        let consistency = routine_consistency(user, &in_range);
        let progress_metrics = if in_range.is_empty() {
            placeholder_metrics()
        } else {
            self.metric_cards(user, window, consistency)
        };

        let routine_score_data = dense_series(window, &in_range, |date, day| {
            daily_routine_score(user, date, day)
        });
        let skin_concern_data = dense_series(window, &in_range, |date, _| {
            self.scores.skin_concern(user, date)
        });

        let goals_data: Vec<GoalView> = user.goals.iter().map(goal_view).collect();
        let goal_summary = summarize_goals(&goals_data);

        tracing::debug!(
            range = %range,
            window_days = range.days(),
            days_logged = in_range.len(),
            consistency,
            "Aggregated progress dashboard"
        );

        DashboardViewModel {
            progress_metrics,
            routine_score_data,
            skin_concern_data,
            adherence_data: adherence_calendar(user),
            goals_data,
            goal_summary,
            insights_data: insights(!in_range.is_empty(), consistency),
        }
    }

    fn metric_cards(&self, user: &UserData, window: DateWindow, consistency: u32) -> Vec<MetricCard> {
        let previous = self.scores.previous_period(user, window);
        let consistency = f64::from(consistency);
        let score = self.scores.routine_score(user, window);
        let improvement = self.scores.skin_improvement(user, window);
        let effectiveness = self.scores.product_effectiveness(user, window);

        vec![
            card(
                "Routine Consistency",
                format!("{consistency}%"),
                format!("{:.0}%", consistency - previous.consistency),
                change_type(consistency, previous.consistency),
                "Calendar",
                "Daily routine adherence for the selected period",
            ),
            card(
                "Overall Routine Score",
                format!("{score}/10"),
                format!("{:.1}", score - previous.routine_score),
                change_type(score, previous.routine_score),
                "TrendingUp",
                "Your routine effectiveness has improved significantly",
            ),
            card(
                "Skin Improvement",
                format!("{improvement}%"),
                format!("{:.0}%", improvement - previous.skin_improvement),
                change_type(improvement, previous.skin_improvement),
                "Sparkles",
                "Visible improvements in skin texture and clarity",
            ),
            card(
                "Product Effectiveness",
                format!("{effectiveness}/10"),
                format!("{:.1}", effectiveness - previous.product_effectiveness),
                change_type(effectiveness, previous.product_effectiveness),
                "Star",
                "Current products are working well for your skin",
            ),
        ]
    }
}

/// Logged days inside the window. Keys that are not ISO dates never fall
/// inside a window.
fn progress_in_window(user: &UserData, window: DateWindow) -> BTreeMap<NaiveDate, &DayProgress> {
    user.progress
        .iter()
        .filter_map(|(key, day)| {
            let date = NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()?;
            window.contains(date).then_some((date, day))
        })
        .collect()
}

/// Percentage of prescribed AM/PM products completed over the logged days.
///
/// Days whose weekday has no routine count toward neither side.
fn routine_consistency(user: &UserData, in_range: &BTreeMap<NaiveDate, &DayProgress>) -> u32 {
    let mut completed = 0usize;
    let mut total = 0usize;

    for (date, day) in in_range {
        let Some(routine) = user.routine_for(*date) else {
            continue;
        };
        total += routine.task_count();
        completed += day.completed_daily();
    }

    if total == 0 {
        return 0;
    }
    (completed as f64 / total as f64 * 100.0).round() as u32
}

/// Routine score for one logged day on a 0-10 scale.
fn daily_routine_score(user: &UserData, date: NaiveDate, day: &DayProgress) -> f64 {
    match user.routine_for(date) {
        Some(routine) if routine.task_count() > 0 => {
            day.completed_daily() as f64 / routine.task_count() as f64 * 10.0
        }
        _ => 0.0,
    }
}

/// One point per window day; days without a log entry have no value.
fn dense_series<F>(
    window: DateWindow,
    in_range: &BTreeMap<NaiveDate, &DayProgress>,
    mut value: F,
) -> Vec<SeriesPoint>
where
    F: FnMut(NaiveDate, &DayProgress) -> f64,
{
    window
        .days()
        .map(|date| SeriesPoint {
            date: date.format("%b %-d").to_string(),
            value: in_range
                .get(&date)
                .map(|&day| round_one_decimal(value(date, day))),
        })
        .collect()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Adherence for every logged day, regardless of the selected window.
fn adherence_calendar(user: &UserData) -> BTreeMap<String, AdherenceDay> {
    user.progress
        .iter()
        .map(|(key, day)| {
            let morning = day.morning_done();
            let evening = day.evening_done();
            let completion = match (morning, evening) {
                (true, true) => 100,
                (true, false) | (false, true) => 50,
                (false, false) => 0,
            };
            let entry = AdherenceDay {
                completion,
                morning,
                evening,
                weekly: day.weekly_done(),
                level: AdherenceLevel::from_completion(completion),
            };
            (key.clone(), entry)
        })
        .collect()
}

fn goal_view(goal: &Goal) -> GoalView {
    let progress = goal.progress.unwrap_or(0.0).clamp(0.0, 100.0);
    let status = if progress >= 100.0 {
        GoalStatus::Completed
    } else {
        GoalStatus::OnTrack
    };

    let mut extra = goal.extra.clone();
    extra.remove("status");

    GoalView {
        id: goal.id.clone(),
        title: goal.title.clone(),
        target: goal.target.clone(),
        progress,
        deadline: goal.deadline.clone(),
        status,
        extra,
    }
}

fn summarize_goals(goals: &[GoalView]) -> GoalSummary {
    goals
        .iter()
        .fold(GoalSummary::default(), |mut summary, goal| {
            match goal.status {
                GoalStatus::Completed => summary.completed += 1,
                GoalStatus::OnTrack => summary.on_track += 1,
            }
            summary
        })
}

fn insights(has_data: bool, consistency: u32) -> Vec<Insight> {
    if !has_data {
        return vec![Insight {
            id: RecordId::from("no-data"),
            kind: InsightType::Recommendation,
            title: "Start Tracking Your Progress".to_string(),
            description: "Log your daily routine to start generating personalized insights and track your skin health journey.".to_string(),
            date: "now".to_string(),
            priority: InsightPriority::High,
            actions: Vec::new(),
            action_buttons: vec![button("Log Routine", "Plus", "log-routine")],
        }];
    }

    let mut out = vec![Insight {
        id: RecordId::Number(1),
        kind: InsightType::Improvement,
        title: "Great Job on Consistency!".to_string(),
        description: format!(
            "You've maintained a {consistency}% routine adherence. Keep it up!"
        ),
        date: "1 day ago".to_string(),
        priority: InsightPriority::High,
        actions: vec!["Continue current routine".to_string()],
        action_buttons: Vec::new(),
    }];

    if consistency < CONSISTENCY_REMINDER_THRESHOLD {
        out.push(Insight {
            id: RecordId::Number(2),
            kind: InsightType::Recommendation,
            title: "Improve Your Routine Consistency".to_string(),
            description: "Try setting reminders to help you stay on track with your AM and PM routines.".to_string(),
            date: "now".to_string(),
            priority: InsightPriority::Medium,
            actions: Vec::new(),
            action_buttons: vec![button("Set Reminder", "Bell", "set_reminder")],
        });
    }

    out
}

fn button(label: &str, icon: &str, action_id: &str) -> ActionButton {
    ActionButton {
        label: label.to_string(),
        variant: "default".to_string(),
        icon: icon.to_string(),
        action_id: action_id.to_string(),
    }
}

/// Cards shown before anything has been logged in the window.
fn placeholder_metrics() -> Vec<MetricCard> {
    let na = || "N/A".to_string();
    vec![
        card(
            "Routine Consistency",
            "0%".to_string(),
            na(),
            ChangeType::Neutral,
            "Calendar",
            "Start logging your routine to see your consistency score.",
        ),
        card(
            "Overall Routine Score",
            na(),
            na(),
            ChangeType::Neutral,
            "TrendingUp",
            "Log your routine to start calculating your overall score.",
        ),
        card(
            "Skin Improvement",
            na(),
            na(),
            ChangeType::Neutral,
            "Sparkles",
            "Upload photos to track your skin's improvement over time.",
        ),
        card(
            "Product Effectiveness",
            na(),
            na(),
            ChangeType::Neutral,
            "Star",
            "Rate products to learn about their effectiveness for you.",
        ),
    ]
}

fn card(
    title: &str,
    value: String,
    change: String,
    change_type: ChangeType,
    icon: &str,
    description: &str,
) -> MetricCard {
    MetricCard {
        title: title.to_string(),
        value,
        change,
        change_type,
        icon: icon.to_string(),
        description: description.to_string(),
    }
}

fn change_type(current: f64, previous: f64) -> ChangeType {
    if current >= previous {
        ChangeType::Positive
    } else {
        ChangeType::Negative
    }
}
