//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::FullRepository;
use crate::db::RepositoryType;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for storage operations
    pub repository: Arc<dyn FullRepository>,
    /// Backend kind, reported by the health endpoint
    pub repository_type: RepositoryType,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn FullRepository>, repository_type: RepositoryType) -> Self {
        Self {
            repository,
            repository_type,
        }
    }

    /// State backed by a fresh in-memory repository.
    pub fn local() -> Self {
        Self::new(
            crate::db::RepositoryFactory::create_local(),
            RepositoryType::Local,
        )
    }
}
