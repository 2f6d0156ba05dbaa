//! Repository trait definitions for storage operations.
//!
//! - [`error`]: Error types for repository operations
//! - [`activity`]: Activity log CRUD with soft delete
//! - [`goal`]: Goal CRUD
//!
//! Functions that need every capability take a [`FullRepository`] bound.

pub mod activity;
pub mod error;
pub mod goal;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

pub use activity::ActivityRepository;
pub use goal::GoalRepository;

/// Composite trait bound for a complete repository implementation.
pub trait FullRepository: ActivityRepository + GoalRepository {}

// Blanket implementation: anything implementing both traits is a FullRepository
impl<T> FullRepository for T where T: ActivityRepository + GoalRepository {}
