//! Document snapshots, request payloads and view models.

pub mod dashboard;
pub mod date_range;
pub mod goal;
pub mod user_data;
