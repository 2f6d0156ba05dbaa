//! Activity repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{ActivityId, ActivityRecord, StoredActivity, UserId};

/// Repository trait for a user's activity log.
///
/// Activities are soft-deleted: a deleted activity keeps its id and data but is
/// hidden from default listings.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Check if the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Store a new activity for `user_id` and return it with its assigned id.
    async fn insert_activity(
        &self,
        user_id: UserId,
        record: ActivityRecord,
    ) -> RepositoryResult<StoredActivity>;

    /// Fetch one activity owned by `user_id`, deleted or not.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - unknown id or owned by another user
    async fn get_activity(
        &self,
        user_id: UserId,
        activity_id: ActivityId,
    ) -> RepositoryResult<StoredActivity>;

    /// List a user's activities in insertion order.
    async fn list_activities(
        &self,
        user_id: UserId,
        include_deleted: bool,
    ) -> RepositoryResult<Vec<StoredActivity>>;

    /// Replace the record of a live activity.
    async fn update_activity(
        &self,
        user_id: UserId,
        activity_id: ActivityId,
        record: ActivityRecord,
    ) -> RepositoryResult<StoredActivity>;

    /// Flag an activity as deleted. Deleting an already deleted activity is NotFound.
    async fn soft_delete_activity(
        &self,
        user_id: UserId,
        activity_id: ActivityId,
    ) -> RepositoryResult<()>;
}
