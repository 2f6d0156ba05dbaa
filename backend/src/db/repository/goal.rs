//! Goal repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{Goal, GoalId, NewGoal, UserId};

#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Create an open goal with zero progress.
    async fn insert_goal(&self, user_id: UserId, goal: NewGoal) -> RepositoryResult<Goal>;

    /// List a user's goals in creation order.
    async fn list_goals(&self, user_id: UserId) -> RepositoryResult<Vec<Goal>>;

    /// Set completion on a goal and return the updated goal.
    async fn set_goal_completed(
        &self,
        user_id: UserId,
        goal_id: GoalId,
        completed: bool,
    ) -> RepositoryResult<Goal>;

    async fn delete_goal(&self, user_id: UserId, goal_id: GoalId) -> RepositoryResult<()>;
}
