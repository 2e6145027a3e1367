//! Business logic services.

pub mod check_in;
pub mod checklist;
pub mod goals;
pub mod points;
pub mod progress;
pub mod score_source;
