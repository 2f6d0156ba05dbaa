//! High-level service layer over the repository traits.
//!
//! These functions hold the business rules that must be the same for every
//! storage backend: validating records before they are stored, hiding
//! soft-deleted activities from analytics, and goal bookkeeping.
//!
//! # Usage
//!
//! ```no_run
//! use flowtrack::db::{services, repositories::LocalRepository};
//! use flowtrack::models::UserId;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!     let analytics = services::user_analytics(&repo, UserId::new(1)).await?;
//!     println!("Peak time: {}", analytics.summary_stats.peak_time_label);
//!     Ok(())
//! }
//! ```

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::repository::{ErrorContext, FullRepository, RepositoryError, RepositoryResult};
use crate::models::{
    parse_time_of_day, ActivityId, ActivityRecord, Goal, GoalId, GoalProgress, NewGoal,
    StoredActivity, UserId,
};
use crate::services::analytics::{aggregate, AnalyticsResult};

// ==================== Health & Connection ====================

/// Check if the repository is healthy.
pub async fn health_check<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== Activity Operations ====================

/// Check that a record can be aggregated and fill in derived fields.
///
/// Rejects a malformed `date`, `startTime` or `endTime`; blank times are
/// stored as absent. When both times are present and `durationMinutes` is
/// not, the duration is derived from them.
pub fn validate_record(mut record: ActivityRecord) -> RepositoryResult<ActivityRecord> {
    let context = || ErrorContext::new("validate_record").with_entity("activity");
    record.clear_blank_times();

    record.parsed_date().map_err(|e| {
        RepositoryError::validation_with_context(
            format!("invalid date '{}': {}", record.date, e),
            context().with_details("expected YYYY-MM-DD"),
        )
    })?;

    for (field, value) in [("startTime", &record.start_time), ("endTime", &record.end_time)] {
        if let Some(raw) = value {
            parse_time_of_day(raw).map_err(|e| {
                RepositoryError::validation_with_context(
                    format!("invalid {} '{}': {}", field, raw, e),
                    context().with_details("expected HH:MM"),
                )
            })?;
        }
    }

    if record.duration_minutes.is_none() {
        // Both times were validated above.
        record.duration_minutes = record.span_minutes().ok().flatten();
    }

    Ok(record)
}

/// Validate and store a new activity for `user_id`.
pub async fn log_activity<R: FullRepository + ?Sized>(
    repo: &R,
    user_id: UserId,
    record: ActivityRecord,
) -> RepositoryResult<StoredActivity> {
    let record = validate_record(record).map_err(|e| e.with_operation("log_activity"))?;
    let stored = repo.insert_activity(user_id, record).await?;
    info!(
        "Logged activity {} for user {} on {}",
        stored.id, user_id, stored.record.date
    );
    Ok(stored)
}

/// List a user's live (not deleted) activities.
pub async fn list_activities<R: FullRepository + ?Sized>(
    repo: &R,
    user_id: UserId,
) -> RepositoryResult<Vec<StoredActivity>> {
    repo.list_activities(user_id, false).await
}

/// Validate and replace the record of an existing activity.
pub async fn update_activity<R: FullRepository + ?Sized>(
    repo: &R,
    user_id: UserId,
    activity_id: ActivityId,
    record: ActivityRecord,
) -> RepositoryResult<StoredActivity> {
    let record = validate_record(record).map_err(|e| e.with_operation("update_activity"))?;
    repo.update_activity(user_id, activity_id, record).await
}

/// Soft-delete an activity.
pub async fn delete_activity<R: FullRepository + ?Sized>(
    repo: &R,
    user_id: UserId,
    activity_id: ActivityId,
) -> RepositoryResult<()> {
    repo.soft_delete_activity(user_id, activity_id).await?;
    info!("Deleted activity {} for user {}", activity_id, user_id);
    Ok(())
}

// ==================== Analytics ====================

/// Aggregate a user's live activities.
///
/// A user with no activities gets the empty analytics view, not an error.
pub async fn user_analytics<R: FullRepository + ?Sized>(
    repo: &R,
    user_id: UserId,
) -> RepositoryResult<AnalyticsResult> {
    let records: Vec<ActivityRecord> = repo
        .list_activities(user_id, false)
        .await?
        .into_iter()
        .map(|stored| stored.record)
        .collect();

    debug!("Aggregating {} activities for user {}", records.len(), user_id);

    aggregate(&records).map_err(|e| {
        // Records are validated on the way in, so this means the store holds bad data.
        warn!("Stored activities for user {} failed to aggregate: {}", user_id, e);
        RepositoryError::internal_with_context(
            e.to_string(),
            ErrorContext::new("user_analytics").with_entity("activity"),
        )
    })
}

// ==================== Goals ====================

/// Create a goal. The title must not be blank.
pub async fn create_goal<R: FullRepository + ?Sized>(
    repo: &R,
    user_id: UserId,
    mut goal: NewGoal,
) -> RepositoryResult<Goal> {
    goal.title = goal.title.trim().to_string();
    if goal.title.is_empty() {
        return Err(RepositoryError::validation_with_context(
            "goal title must not be empty",
            ErrorContext::new("create_goal").with_entity("goal"),
        ));
    }
    goal.description = goal
        .description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());

    repo.insert_goal(user_id, goal).await
}

pub async fn list_goals<R: FullRepository + ?Sized>(
    repo: &R,
    user_id: UserId,
) -> RepositoryResult<Vec<Goal>> {
    repo.list_goals(user_id).await
}

/// Flip a goal between complete and open.
pub async fn toggle_goal<R: FullRepository + ?Sized>(
    repo: &R,
    user_id: UserId,
    goal_id: GoalId,
) -> RepositoryResult<Goal> {
    let current = repo
        .list_goals(user_id)
        .await?
        .into_iter()
        .find(|g| g.id == goal_id)
        .ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Goal {} not found", goal_id),
                ErrorContext::new("toggle_goal")
                    .with_entity("goal")
                    .with_entity_id(goal_id),
            )
        })?;

    repo.set_goal_completed(user_id, goal_id, !current.completed)
        .await
}

pub async fn delete_goal<R: FullRepository + ?Sized>(
    repo: &R,
    user_id: UserId,
    goal_id: GoalId,
) -> RepositoryResult<()> {
    repo.delete_goal(user_id, goal_id).await
}

pub async fn goal_progress<R: FullRepository + ?Sized>(
    repo: &R,
    user_id: UserId,
) -> RepositoryResult<GoalProgress> {
    let goals = repo.list_goals(user_id).await?;
    Ok(GoalProgress::from_goals(&goals))
}

// ==================== Dashboard ====================

/// Everything the dashboard page shows for one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub analytics: AnalyticsResult,
    pub goals: GoalProgress,
}

pub async fn dashboard<R: FullRepository + ?Sized>(
    repo: &R,
    user_id: UserId,
) -> RepositoryResult<Dashboard> {
    Ok(Dashboard {
        analytics: user_analytics(repo, user_id).await?,
        goals: goal_progress(repo, user_id).await?,
    })
}
