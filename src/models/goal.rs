//! Goal create/edit payloads.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use super::user_data::{Goal, RecordId};

/// Goal as submitted from the add/edit goal form. A draft without `id` is a
/// new goal.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GoalDraft {
    pub id: Option<RecordId>,
    #[validate(length(min = 1, max = 120, message = "title must be 1-120 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 120, message = "target must be 1-120 characters"))]
    pub target: String,
    #[validate(range(min = 0.0, max = 100.0, message = "progress must be between 0 and 100"))]
    pub progress: f64,
    pub deadline: NaiveDate,
}

/// Request body for `POST /api/v1/goals`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertGoalRequest {
    #[serde(default)]
    pub goals: Vec<Goal>,
    pub goal: GoalDraft,
}
