//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use super::dto::{
    ActivityListResponse, ActivityRecord, AnalyticsResult, Dashboard, Goal, GoalListResponse,
    HealthResponse, NewGoal, StoredActivity,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::services;
use crate::models::{ActivityId, GoalId, UserId};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repo_status = match services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        repository: format!("{}: {}", state.repository_type, repo_status),
    }))
}

// =============================================================================
// Stateless analytics
// =============================================================================

/// POST /v1/analytics
///
/// Aggregate an activity list supplied in the request body. Nothing is stored.
pub async fn compute_analytics(
    payload: Result<Json<Vec<ActivityRecord>>, JsonRejection>,
) -> HandlerResult<AnalyticsResult> {
    let Json(records) = payload?;
    let result = crate::services::aggregate(&records)?;
    info!(records = records.len(), "computed analytics");
    Ok(Json(result))
}

// =============================================================================
// Activities
// =============================================================================

/// GET /v1/users/{user_id}/activities
pub async fn list_activities(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> HandlerResult<ActivityListResponse> {
    let activities = services::list_activities(state.repository.as_ref(), user_id).await?;
    Ok(Json(activities.into()))
}

/// POST /v1/users/{user_id}/activities
pub async fn create_activity(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    payload: Result<Json<ActivityRecord>, JsonRejection>,
) -> Result<(StatusCode, Json<StoredActivity>), AppError> {
    let Json(record) = payload?;
    let stored = services::log_activity(state.repository.as_ref(), user_id, record).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// PUT /v1/users/{user_id}/activities/{activity_id}
pub async fn update_activity(
    State(state): State<AppState>,
    Path((user_id, activity_id)): Path<(UserId, ActivityId)>,
    payload: Result<Json<ActivityRecord>, JsonRejection>,
) -> HandlerResult<StoredActivity> {
    let Json(record) = payload?;
    let stored =
        services::update_activity(state.repository.as_ref(), user_id, activity_id, record).await?;
    Ok(Json(stored))
}

/// DELETE /v1/users/{user_id}/activities/{activity_id}
pub async fn delete_activity(
    State(state): State<AppState>,
    Path((user_id, activity_id)): Path<(UserId, ActivityId)>,
) -> Result<StatusCode, AppError> {
    services::delete_activity(state.repository.as_ref(), user_id, activity_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Per-user analytics
// =============================================================================

/// GET /v1/users/{user_id}/analytics
pub async fn get_user_analytics(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> HandlerResult<AnalyticsResult> {
    let result = services::user_analytics(state.repository.as_ref(), user_id).await?;
    Ok(Json(result))
}

/// GET /v1/users/{user_id}/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> HandlerResult<Dashboard> {
    let dashboard = services::dashboard(state.repository.as_ref(), user_id).await?;
    Ok(Json(dashboard))
}

// =============================================================================
// Goals
// =============================================================================

/// GET /v1/users/{user_id}/goals
pub async fn list_goals(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> HandlerResult<GoalListResponse> {
    let goals = services::list_goals(state.repository.as_ref(), user_id).await?;
    Ok(Json(goals.into()))
}

/// POST /v1/users/{user_id}/goals
pub async fn create_goal(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    payload: Result<Json<NewGoal>, JsonRejection>,
) -> Result<(StatusCode, Json<Goal>), AppError> {
    let Json(goal) = payload?;
    let goal = services::create_goal(state.repository.as_ref(), user_id, goal).await?;
    Ok((StatusCode::CREATED, Json(goal)))
}

/// POST /v1/users/{user_id}/goals/{goal_id}/toggle
pub async fn toggle_goal(
    State(state): State<AppState>,
    Path((user_id, goal_id)): Path<(UserId, GoalId)>,
) -> HandlerResult<Goal> {
    let goal = services::toggle_goal(state.repository.as_ref(), user_id, goal_id).await?;
    Ok(Json(goal))
}

/// DELETE /v1/users/{user_id}/goals/{goal_id}
pub async fn delete_goal(
    State(state): State<AppState>,
    Path((user_id, goal_id)): Path<(UserId, GoalId)>,
) -> Result<StatusCode, AppError> {
    services::delete_goal(state.repository.as_ref(), user_id, goal_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
