//! Display-ready progress dashboard produced by the aggregator.

use std::collections::BTreeMap;

use serde::Serialize;

use super::user_data::RecordId;

/// Direction of a metric change, used for colouring only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Positive,
    Negative,
    Neutral,
}

/// One headline metric card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricCard {
    pub title: String,
    pub value: String,
    pub change: String,
    pub change_type: ChangeType,
    pub icon: String,
    pub description: String,
}

/// One point of a dense daily chart series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    /// Short display label, e.g. "Mar 5".
    pub date: String,
    pub value: Option<f64>,
}

/// Calendar heat band for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdherenceLevel {
    Excellent,
    Good,
    Fair,
    Poor,
    None,
}

impl AdherenceLevel {
    pub fn from_completion(completion: u8) -> Self {
        match completion {
            90.. => Self::Excellent,
            70..=89 => Self::Good,
            50..=69 => Self::Fair,
            1..=49 => Self::Poor,
            0 => Self::None,
        }
    }
}

/// Adherence for one logged day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdherenceDay {
    /// 0, 50 or 100.
    pub completion: u8,
    pub morning: bool,
    pub evening: bool,
    pub weekly: bool,
    pub level: AdherenceLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalStatus {
    Completed,
    OnTrack,
}

/// A stored goal with its progress clamped and status derived.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub title: String,
    pub target: String,
    pub progress: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    pub status: GoalStatus,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Goal counts per status.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalSummary {
    pub completed: usize,
    pub on_track: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightType {
    Improvement,
    Recommendation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightPriority {
    High,
    Medium,
}

/// Button attached to an insight; `action_id` is routed by the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionButton {
    pub label: String,
    pub variant: String,
    pub icon: String,
    pub action_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub kind: InsightType,
    pub title: String,
    pub description: String,
    /// Relative display date, e.g. "now".
    pub date: String,
    pub priority: InsightPriority,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub action_buttons: Vec<ActionButton>,
}

/// Everything the progress dashboard renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardViewModel {
    pub progress_metrics: Vec<MetricCard>,
    pub routine_score_data: Vec<SeriesPoint>,
    pub skin_concern_data: Vec<SeriesPoint>,
    /// ISO date → adherence, over the full history.
    pub adherence_data: BTreeMap<String, AdherenceDay>,
    pub goals_data: Vec<GoalView>,
    pub goal_summary: GoalSummary,
    pub insights_data: Vec<Insight>,
}
