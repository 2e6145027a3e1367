//! Goal routes.

use axum::Json;
use axum_extra::extract::WithRejection;

use crate::errors::{ApiResponse, AppError};
use crate::models::goal::UpsertGoalRequest;
use crate::models::user_data::Goal;
use crate::services::goals as goal_service;

/// POST /api/v1/goals: add or edit a goal; returns the full goal list to store.
pub async fn upsert(
    WithRejection(Json(body), _): WithRejection<Json<UpsertGoalRequest>, AppError>,
) -> Result<Json<ApiResponse<Vec<Goal>>>, AppError> {
    let goals = goal_service::upsert(body.goals, body.goal)?;
    Ok(ApiResponse::success(goals))
}
