//! Daily routine checklist: the day's products in application order with
//! whatever has been logged for them.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::user_data::{
    weekday_name, CompletionStatus, RoutineProduct, SlotLog, UserData,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Completed,
    Skipped,
    Pending,
}

impl From<Option<CompletionStatus>> for StepState {
    fn from(status: Option<CompletionStatus>) -> Self {
        match status {
            Some(CompletionStatus::Completed) => Self::Completed,
            Some(CompletionStatus::Skipped) => Self::Skipped,
            Some(CompletionStatus::Other) | None => Self::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChecklistItem {
    #[serde(flatten)]
    pub product: RoutineProduct,
    pub state: StepState,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyChecklist {
    pub date: NaiveDate,
    pub weekday: &'static str,
    #[serde(rename = "AM")]
    pub am: Vec<ChecklistItem>,
    #[serde(rename = "PM")]
    pub pm: Vec<ChecklistItem>,
    pub completed: usize,
    pub total: usize,
}

/// Build the checklist for `date`. A weekday without a routine yields empty
/// lists.
pub fn checklist(user: &UserData, date: NaiveDate) -> DailyChecklist {
    let day_log = user.progress.get(&date.format("%Y-%m-%d").to_string());
    let (am, pm) = match user.routine_for(date) {
        Some(routine) => (
            items(&routine.am, day_log.map(|d| &d.am)),
            items(&routine.pm, day_log.map(|d| &d.pm)),
        ),
        None => (Vec::new(), Vec::new()),
    };

    let total = am.len() + pm.len();
    let completed = am
        .iter()
        .chain(pm.iter())
        .filter(|item| item.state == StepState::Completed)
        .count();

    DailyChecklist {
        date,
        weekday: weekday_name(date.weekday()),
        am,
        pm,
        completed,
        total,
    }
}

/// Products ordered by step; equal steps keep their stored order.
fn items(products: &[RoutineProduct], log: Option<&SlotLog>) -> Vec<ChecklistItem> {
    let mut ordered: Vec<&RoutineProduct> = products.iter().collect();
    ordered.sort_by_key(|p| p.step);
    ordered
        .into_iter()
        .map(|product| ChecklistItem {
            product: product.clone(),
            state: log.and_then(|l| l.get(&product.name).copied()).into(),
        })
        .collect()
}
