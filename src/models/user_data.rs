//! Per-user document snapshot as stored by the external document store.
//!
//! Every collection is optional in the stored document and may have been
//! written with a different shape by older clients, so deserialization is
//! lenient: a missing, `null` or mis-shaped collection reads as empty.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};

/// Logged state of a single product on a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionStatus {
    Completed,
    Skipped,
    #[serde(other)]
    Other,
}

impl CompletionStatus {
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Product name → logged status for one time-of-day slot.
pub type SlotLog = BTreeMap<String, CompletionStatus>;

/// Everything logged on one calendar day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayProgress {
    #[serde(rename = "AM", default, deserialize_with = "lenient")]
    pub am: SlotLog,
    #[serde(rename = "PM", default, deserialize_with = "lenient")]
    pub pm: SlotLog,
    #[serde(rename = "Weekly", default, deserialize_with = "lenient")]
    pub weekly: SlotLog,
}

impl DayProgress {
    /// Number of AM and PM products marked completed. Weekly treatments are
    /// not part of the daily routine and are not counted.
    pub fn completed_daily(&self) -> usize {
        count_completed(&self.am) + count_completed(&self.pm)
    }

    pub fn morning_done(&self) -> bool {
        count_completed(&self.am) > 0
    }

    pub fn evening_done(&self) -> bool {
        count_completed(&self.pm) > 0
    }

    pub fn weekly_done(&self) -> bool {
        count_completed(&self.weekly) > 0
    }
}

fn count_completed(slot: &SlotLog) -> usize {
    slot.values().filter(|s| s.is_completed()).count()
}

/// A product placed in the user's routine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutineProduct {
    pub name: String,
    pub step: i32,
    pub category: String,
    pub image: Option<String>,
}

/// Products prescribed for one weekday, split by time of day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutineDay {
    #[serde(rename = "AM", default, deserialize_with = "lenient")]
    pub am: Vec<RoutineProduct>,
    #[serde(rename = "PM", default, deserialize_with = "lenient")]
    pub pm: Vec<RoutineProduct>,
}

impl RoutineDay {
    pub fn task_count(&self) -> usize {
        self.am.len() + self.pm.len()
    }
}

/// Goal and insight identifiers are numbers in some documents and strings in
/// others.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A user-defined skincare goal as stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient")]
    pub target: String,
    /// Stored percentage; may be out of range or missing.
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub progress: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub deadline: Option<String>,
    /// Fields this service does not interpret, kept so they round-trip.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The per-user document. Only the fields the progress features read are
/// modelled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    /// ISO date key → day log.
    #[serde(default, deserialize_with = "lenient")]
    pub progress: BTreeMap<String, DayProgress>,
    /// English weekday name ("Monday") → routine.
    #[serde(default, deserialize_with = "lenient")]
    pub routine: HashMap<String, RoutineDay>,
    #[serde(default, deserialize_with = "lenient_items")]
    pub goals: Vec<Goal>,
    #[serde(default, deserialize_with = "lenient_items")]
    pub skin_concerns: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub last_check_in: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient")]
    pub check_in_streak: u32,
    #[serde(default, deserialize_with = "lenient")]
    pub total_check_ins: u32,
    #[serde(default, deserialize_with = "lenient")]
    pub points: u32,
}

impl UserData {
    /// Routine prescribed for the weekday of `date`, if any.
    pub fn routine_for(&self, date: NaiveDate) -> Option<&RoutineDay> {
        self.routine.get(weekday_name(date.weekday()))
    }
}

/// Full English weekday name, as used for routine keys.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Deserialize `T`, falling back to `T::default()` when the value has the
/// wrong shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Deserialize a list element by element, dropping elements that cannot be
/// read. Anything other than an array reads as empty.
fn lenient_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}
