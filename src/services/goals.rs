//! Goal create and edit.

use uuid::Uuid;
use validator::Validate;

use crate::errors::AppError;
use crate::models::goal::GoalDraft;
use crate::models::user_data::{Goal, RecordId};

/// Apply a validated draft to the goal list and return the new list.
///
/// A draft whose id matches an existing goal replaces that goal's edited
/// fields in place and keeps any other stored fields. Any other draft is
/// appended with a fresh id.
pub fn upsert(mut goals: Vec<Goal>, draft: GoalDraft) -> Result<Vec<Goal>, AppError> {
    draft.validate()?;

    let deadline = draft.deadline.format("%Y-%m-%d").to_string();
    let existing = draft
        .id
        .as_ref()
        .and_then(|id| goals.iter_mut().find(|g| g.id.as_ref() == Some(id)));

    match existing {
        Some(goal) => {
            goal.title = draft.title;
            goal.target = draft.target;
            goal.progress = Some(draft.progress);
            goal.deadline = Some(deadline);
            tracing::debug!(id = ?goal.id, "Updated goal");
        }
        None => {
            let id = RecordId::Text(Uuid::new_v4().to_string());
            tracing::debug!(?id, "Added goal");
            goals.push(Goal {
                id: Some(id),
                title: draft.title,
                target: draft.target,
                progress: Some(draft.progress),
                deadline: Some(deadline),
                extra: serde_json::Map::new(),
            });
        }
    }

    Ok(goals)
}
