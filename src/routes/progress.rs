//! Progress routes: dashboard aggregation and the daily routine checklist.

use axum::{
    extract::{Query, State},
    Json,
};
use axum_extra::extract::WithRejection;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::errors::{ApiResponse, AppError};
use crate::models::dashboard::DashboardViewModel;
use crate::models::date_range::DateRangeKey;
use crate::models::user_data::UserData;
use crate::services::checklist::{self, DailyChecklist};
use crate::services::progress::{self, ProgressAggregator};
use crate::services::score_source::PlaceholderScores;
use crate::AppState;

/// Query parameters for the dashboard.
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub range: Option<String>,
    /// Last day of the window; defaults to the current UTC date.
    pub today: Option<NaiveDate>,
}

/// POST /api/v1/progress/dashboard: aggregate the posted user document.
pub async fn dashboard(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<DashboardQuery>, AppError>,
    WithRejection(Json(user), _): WithRejection<Json<UserData>, AppError>,
) -> Result<Json<ApiResponse<DashboardViewModel>>, AppError> {
    let range = match query.range.as_deref() {
        Some(raw) => raw.parse::<DateRangeKey>()?,
        None => state.config.default_date_range,
    };

    let view = match query.today {
        Some(today) => {
            ProgressAggregator::new(PlaceholderScores).aggregate(Some(&user), range, today)
        }
        None => progress::aggregate(Some(&user), range),
    };
    Ok(ApiResponse::success(view))
}

#[derive(Debug, Deserialize)]
pub struct ChecklistQuery {
    pub date: Option<NaiveDate>,
}

/// POST /api/v1/progress/checklist: routine steps for one day with their logged state.
pub async fn checklist(
    WithRejection(Query(query), _): WithRejection<Query<ChecklistQuery>, AppError>,
    WithRejection(Json(user), _): WithRejection<Json<UserData>, AppError>,
) -> Result<Json<ApiResponse<DailyChecklist>>, AppError> {
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());
    Ok(ApiResponse::success(checklist::checklist(&user, date)))
}
