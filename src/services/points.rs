//! Reward points for engagement actions.

use serde::{Deserialize, Serialize};

/// Actions that earn points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointAction {
    AssessmentCompleted,
    RoutineAdded,
    RoutineTracked,
    IngredientViewed,
    DermaScanCompleted,
    DailyCheckIn,
    #[serde(other)]
    Unknown,
}

impl PointAction {
    pub fn points(self) -> u32 {
        match self {
            Self::AssessmentCompleted => 50,
            Self::RoutineAdded => 75,
            Self::RoutineTracked => 10,
            Self::IngredientViewed => 5,
            Self::DermaScanCompleted => 100,
            Self::DailyCheckIn => 10,
            Self::Unknown => 0,
        }
    }
}

/// Result of awarding points for one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsAward {
    pub action: PointAction,
    pub points_awarded: u32,
    pub points: u32,
}

/// Add the points for `action` to `current`. Unknown actions leave the total
/// unchanged.
pub fn award(current: u32, action: PointAction) -> PointsAward {
    let awarded = action.points();
    if awarded == 0 {
        tracing::debug!(?action, "No points for action");
    }
    PointsAward {
        action,
        points_awarded: awarded,
        points: current.saturating_add(awarded),
    }
}
