//! Sample document generator for development.
//!
//! Usage: `cargo run --bin sample [DAYS] > user.json`, then post the file to
//! `/api/v1/progress/dashboard`.
//!
//! Writes a user document with a week-long routine, `DAYS` (default 30, at
//! most 3650) of logged history ending today, a few goals and check-in counters.

use chrono::{Datelike, Duration, NaiveDate, Utc};
use glowtrack::models::user_data::{
    weekday_name, CompletionStatus, DayProgress, Goal, RecordId, RoutineDay, RoutineProduct,
    UserData,
};

const AM_PRODUCTS: [(&str, &str); 3] = [
    ("Gentle Cleanser", "Cleanser"),
    ("Vitamin C Serum", "Serum"),
    ("SPF 50 Sunscreen", "Sunscreen"),
];

const PM_PRODUCTS: [(&str, &str); 2] = [("Gentle Cleanser", "Cleanser"), ("Retinol 0.3%", "Treatment")];

/// Longest history the generator writes, about ten years.
const MAX_DAYS: i64 = 3650;

fn main() -> anyhow::Result<()> {
    let days = history_days(std::env::args().nth(1).as_deref())?;
    let today = Utc::now().date_naive();

    let mut user = UserData::default();

    let start = today - Duration::days(6);
    for date in start.iter_days().take(7) {
        user.routine.insert(
            weekday_name(date.weekday()).to_string(),
            RoutineDay {
                am: products(&AM_PRODUCTS),
                pm: products(&PM_PRODUCTS),
            },
        );
    }

    // Miss the evening routine every third day and skip the serum every fifth.
    for offset in 0..days {
        let date = today - Duration::days(offset);
        let mut day = DayProgress::default();
        for (i, (name, _)) in AM_PRODUCTS.iter().enumerate() {
            let status = if i == 1 && offset % 5 == 0 {
                CompletionStatus::Skipped
            } else {
                CompletionStatus::Completed
            };
            day.am.insert(name.to_string(), status);
        }
        if offset % 3 != 0 {
            for (name, _) in PM_PRODUCTS {
                day.pm.insert(name.to_string(), CompletionStatus::Completed);
            }
        }
        if offset % 7 == 0 {
            day.weekly
                .insert("Clay Mask".to_string(), CompletionStatus::Completed);
        }
        user.progress.insert(date.to_string(), day);
    }

    user.goals = vec![
        goal(1, "Reduce Acne Breakouts", "90% reduction", 72.0, today + Duration::days(45)),
        goal(2, "Improve Skin Hydration", "Optimal hydration levels", 100.0, today),
    ];
    user.skin_concerns = vec!["acne".to_string(), "dryness".to_string()];
    user.last_check_in = Some(today - Duration::days(1));
    user.check_in_streak = 3;
    user.total_check_ins = 12;
    user.points = 240;

    println!("{}", serde_json::to_string_pretty(&user)?);
    eprintln!("[done] Generated {days} days of history ending {today}");
    Ok(())
}

/// Parse the `DAYS` argument, clamped to `1..=MAX_DAYS`.
fn history_days(arg: Option<&str>) -> anyhow::Result<i64> {
    let days: i64 = match arg {
        Some(raw) => raw.trim().parse()?,
        None => 30,
    };
    Ok(days.clamp(1, MAX_DAYS))
}

fn products(list: &[(&str, &str)]) -> Vec<RoutineProduct> {
    list.iter()
        .enumerate()
        .map(|(i, (name, category))| RoutineProduct {
            name: name.to_string(),
            step: i as i32 + 1,
            category: category.to_string(),
            image: None,
        })
        .collect()
}

fn goal(id: i64, title: &str, target: &str, progress: f64, deadline: NaiveDate) -> Goal {
    Goal {
        id: Some(RecordId::Number(id)),
        title: title.to_string(),
        target: target.to_string(),
        progress: Some(progress),
        deadline: Some(deadline.to_string()),
        extra: serde_json::Map::new(),
    }
}
