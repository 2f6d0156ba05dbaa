//! Data Transfer Objects for the HTTP API.
//!
//! Domain types already derive Serialize/Deserialize and are re-exported
//! here; this module only adds the response envelopes.

use serde::{Deserialize, Serialize};

pub use crate::db::services::Dashboard;
pub use crate::models::{ActivityRecord, Goal, GoalProgress, NewGoal, StoredActivity};
pub use crate::services::analytics::{
    AnalyticsResult, HourlyPoint, SummaryStats, WeeklyPoint,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Repository backend and its status, e.g. `local: connected`
    pub repository: String,
}

/// Activity list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityListResponse {
    pub activities: Vec<StoredActivity>,
    pub total: usize,
}

impl From<Vec<StoredActivity>> for ActivityListResponse {
    fn from(activities: Vec<StoredActivity>) -> Self {
        let total = activities.len();
        Self { activities, total }
    }
}

/// Goal list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalListResponse {
    pub goals: Vec<Goal>,
    pub progress: GoalProgress,
}

impl From<Vec<Goal>> for GoalListResponse {
    fn from(goals: Vec<Goal>) -> Self {
        let progress = GoalProgress::from_goals(&goals);
        Self { goals, progress }
    }
}
