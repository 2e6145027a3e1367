//! Daily check-in with streak tracking.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::user_data::UserData;
use crate::services::points::{self, PointAction};

/// Short self-care reminders shown after a check-in.
const REMINDERS: [&str; 20] = [
    "Drink plenty of water today!",
    "Don't forget to eat a balanced meal.",
    "A good night's sleep is key to healthy skin.",
    "Remember to apply sunscreen.",
    "Cleanse your face before bed.",
    "Moisturize daily, even if your skin feels oily.",
    "Take a deep breath and relax your jaw.",
    "Eat foods rich in vitamins and antioxidants.",
    "Wash your makeup brushes regularly.",
    "Reapply lip balm to keep your lips hydrated.",
    "Stretch your body to release tension.",
    "Use gentle products, your skin deserves kindness.",
    "Stay consistent with your skincare routine.",
    "Exfoliate once or twice a week, not every day.",
    "Change your pillowcase every few days.",
    "Limit sugar and processed foods when you can.",
    "Don't pick at your skin, let it heal naturally.",
    "Take time today to rest and recharge.",
    "Check the ingredients before trying new products.",
    "Your skin is unique, embrace its journey.",
];

/// Fields to merge into the user document after a check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInPatch {
    pub last_check_in: NaiveDate,
    pub check_in_streak: u32,
    pub total_check_ins: u32,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInOutcome {
    pub patch: CheckInPatch,
    pub points_awarded: u32,
    pub reminder: String,
}

/// Whether the user has already checked in on `today`.
pub fn checked_in_on(user: &UserData, today: NaiveDate) -> bool {
    user.last_check_in == Some(today)
}

/// Record a check-in for `today`.
///
/// The streak continues only when the previous check-in was yesterday.
pub fn check_in(user: &UserData, today: NaiveDate) -> Result<CheckInOutcome, AppError> {
    if checked_in_on(user, today) {
        return Err(AppError::Conflict(format!("Already checked in on {today}")));
    }

    let yesterday = today - Duration::days(1);
    let streak = if user.last_check_in == Some(yesterday) {
        user.check_in_streak.saturating_add(1)
    } else {
        1
    };
    let award = points::award(user.points, PointAction::DailyCheckIn);

    tracing::info!(%today, streak, points = award.points, "Daily check-in recorded");

    Ok(CheckInOutcome {
        patch: CheckInPatch {
            last_check_in: today,
            check_in_streak: streak,
            total_check_ins: user.total_check_ins.saturating_add(1),
            points: award.points,
        },
        points_awarded: award.points_awarded,
        reminder: reminder_for(today).to_string(),
    })
}

/// Reminder for a given day, cycling through the list.
pub fn reminder_for(date: NaiveDate) -> &'static str {
    let idx = date.num_days_from_ce().rem_euclid(REMINDERS.len() as i32) as usize;
    REMINDERS[idx]
}
