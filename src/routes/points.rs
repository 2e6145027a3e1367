//! Reward point routes.

use axum::Json;
use axum_extra::extract::WithRejection;
use serde::Deserialize;

use crate::errors::{ApiResponse, AppError};
use crate::services::points::{self, PointAction, PointsAward};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardRequest {
    pub action: PointAction,
    #[serde(default)]
    pub current_points: u32,
}

/// POST /api/v1/points/award: points earned for an action and the new total.
pub async fn award(
    WithRejection(Json(body), _): WithRejection<Json<AwardRequest>, AppError>,
) -> Result<Json<ApiResponse<PointsAward>>, AppError> {
    Ok(ApiResponse::success(points::award(
        body.current_points,
        body.action,
    )))
}
