//! Daily check-in route.

use axum::{extract::Query, Json};
use axum_extra::extract::WithRejection;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::errors::{ApiResponse, AppError};
use crate::models::user_data::UserData;
use crate::services::check_in::{self as check_in_service, CheckInOutcome};

#[derive(Debug, Deserialize)]
pub struct CheckInQuery {
    pub today: Option<NaiveDate>,
}

/// POST /api/v1/check-in: compute the document patch for today's check-in.
pub async fn check_in(
    WithRejection(Query(query), _): WithRejection<Query<CheckInQuery>, AppError>,
    WithRejection(Json(user), _): WithRejection<Json<UserData>, AppError>,
) -> Result<Json<ApiResponse<CheckInOutcome>>, AppError> {
    let today = query.today.unwrap_or_else(|| Utc::now().date_naive());
    let outcome = check_in_service::check_in(&user, today)?;
    Ok(ApiResponse::success(outcome))
}
