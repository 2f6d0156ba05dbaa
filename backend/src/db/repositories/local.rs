//! In-memory local repository implementation.
//!
//! All data lives in HashMaps behind a single `RwLock`, giving fast,
//! deterministic and isolated storage for development and tests.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::db::repository::*;
use crate::models::{ActivityId, ActivityRecord, Goal, GoalId, NewGoal, StoredActivity, UserId};

/// In-memory local repository.
///
/// Cloning shares the underlying storage.
///
/// # Example
/// ```
/// use flowtrack::db::repositories::LocalRepository;
/// use flowtrack::db::repository::ActivityRepository;
/// use flowtrack::models::UserId;
///
/// let repo = LocalRepository::new();
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// let activities = rt
///     .block_on(repo.list_activities(UserId::new(1), false))
///     .unwrap();
/// assert!(activities.is_empty());
/// ```
#[derive(Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    activities: HashMap<ActivityId, StoredActivity>,
    // Insertion order of activity ids, for stable listings
    activity_order: Vec<ActivityId>,
    goals: HashMap<GoalId, Goal>,
    goal_order: Vec<GoalId>,

    next_activity_id: ActivityId,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            activities: HashMap::new(),
            activity_order: Vec::new(),
            goals: HashMap::new(),
            goal_order: Vec::new(),
            next_activity_id: ActivityId(1),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the reported health, for exercising degraded paths in tests.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Number of stored activities, including soft-deleted ones.
    pub fn activity_count(&self) -> usize {
        self.data.read().activities.len()
    }

    fn activity_not_found(operation: &str, activity_id: ActivityId) -> RepositoryError {
        RepositoryError::not_found_with_context(
            format!("Activity {} not found", activity_id),
            ErrorContext::new(operation)
                .with_entity("activity")
                .with_entity_id(activity_id),
        )
    }

    fn goal_not_found(operation: &str, goal_id: GoalId) -> RepositoryError {
        RepositoryError::not_found_with_context(
            format!("Goal {} not found", goal_id),
            ErrorContext::new(operation)
                .with_entity("goal")
                .with_entity_id(goal_id),
        )
    }
}

#[async_trait]
impl ActivityRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn insert_activity(
        &self,
        user_id: UserId,
        record: ActivityRecord,
    ) -> RepositoryResult<StoredActivity> {
        let mut data = self.data.write();
        let id = data.next_activity_id;
        data.next_activity_id = ActivityId(id.0 + 1);

        let stored = StoredActivity {
            id,
            user_id,
            record,
            deleted: false,
        };
        data.activities.insert(id, stored.clone());
        data.activity_order.push(id);
        Ok(stored)
    }

    async fn get_activity(
        &self,
        user_id: UserId,
        activity_id: ActivityId,
    ) -> RepositoryResult<StoredActivity> {
        let data = self.data.read();
        data.activities
            .get(&activity_id)
            .filter(|a| a.user_id == user_id)
            .cloned()
            .ok_or_else(|| Self::activity_not_found("get_activity", activity_id))
    }

    async fn list_activities(
        &self,
        user_id: UserId,
        include_deleted: bool,
    ) -> RepositoryResult<Vec<StoredActivity>> {
        let data = self.data.read();
        Ok(data
            .activity_order
            .iter()
            .filter_map(|id| data.activities.get(id))
            .filter(|a| a.user_id == user_id && (include_deleted || !a.deleted))
            .cloned()
            .collect())
    }

    async fn update_activity(
        &self,
        user_id: UserId,
        activity_id: ActivityId,
        record: ActivityRecord,
    ) -> RepositoryResult<StoredActivity> {
        let mut data = self.data.write();
        match data.activities.get_mut(&activity_id) {
            Some(stored) if stored.user_id == user_id && !stored.deleted => {
                stored.record = record;
                Ok(stored.clone())
            }
            _ => Err(Self::activity_not_found("update_activity", activity_id)),
        }
    }

    async fn soft_delete_activity(
        &self,
        user_id: UserId,
        activity_id: ActivityId,
    ) -> RepositoryResult<()> {
        let mut data = self.data.write();
        match data.activities.get_mut(&activity_id) {
            Some(stored) if stored.user_id == user_id && !stored.deleted => {
                stored.deleted = true;
                Ok(())
            }
            _ => Err(Self::activity_not_found("soft_delete_activity", activity_id)),
        }
    }
}

#[async_trait]
impl GoalRepository for LocalRepository {
    async fn insert_goal(&self, user_id: UserId, goal: NewGoal) -> RepositoryResult<Goal> {
        let mut data = self.data.write();
        let stored = Goal {
            id: GoalId::generate(),
            user_id,
            title: goal.title,
            description: goal.description,
            target_date: goal.target_date,
            completed: false,
            progress: 0,
        };
        data.goals.insert(stored.id, stored.clone());
        data.goal_order.push(stored.id);
        Ok(stored)
    }

    async fn list_goals(&self, user_id: UserId) -> RepositoryResult<Vec<Goal>> {
        let data = self.data.read();
        Ok(data
            .goal_order
            .iter()
            .filter_map(|id| data.goals.get(id))
            .filter(|g| g.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn set_goal_completed(
        &self,
        user_id: UserId,
        goal_id: GoalId,
        completed: bool,
    ) -> RepositoryResult<Goal> {
        let mut data = self.data.write();
        match data.goals.get_mut(&goal_id) {
            Some(goal) if goal.user_id == user_id => {
                goal.set_completed(completed);
                Ok(goal.clone())
            }
            _ => Err(Self::goal_not_found("set_goal_completed", goal_id)),
        }
    }

    async fn delete_goal(&self, user_id: UserId, goal_id: GoalId) -> RepositoryResult<()> {
        let mut data = self.data.write();
        let owned = data
            .goals
            .get(&goal_id)
            .is_some_and(|g| g.user_id == user_id);
        if !owned {
            return Err(Self::goal_not_found("delete_goal", goal_id));
        }
        data.goals.remove(&goal_id);
        data.goal_order.retain(|id| *id != goal_id);
        Ok(())
    }
}
