//! User goals and their completion summary.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::activity::UserId;

crate::define_id_type!(Uuid, GoalId);

impl GoalId {
    pub fn generate() -> Self {
        GoalId(Uuid::new_v4())
    }
}

/// A goal as stored for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: GoalId,
    pub user_id: UserId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<String>,
    pub completed: bool,
    /// Percent, 0-100.
    pub progress: u8,
}

impl Goal {
    /// Flip completion. Completing pins progress to 100, reopening resets it to 0.
    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
        self.progress = if completed { 100 } else { 0 };
    }
}

/// Request payload for creating a goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub target_date: Option<String>,
}

/// Completed-vs-total summary shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub completed: usize,
    pub total: usize,
    /// `"completed/total"`
    pub label: String,
}

impl GoalProgress {
    pub fn from_goals(goals: &[Goal]) -> Self {
        let completed = goals.iter().filter(|g| g.completed).count();
        let total = goals.len();
        Self {
            completed,
            total,
            label: format!("{}/{}", completed, total),
        }
    }
}
