//! Repository factory for dependency injection.
//!
//! Creates repository instances behind the [`FullRepository`] trait seam
//! based on runtime configuration.

use std::sync::Arc;

use super::config::RepositoryType;
use super::repository::{FullRepository, RepositoryResult};

/// Repository factory for creating repository instances.
///
/// # Example
/// ```
/// use autobuild_engine::db::{RepositoryFactory, RepositoryType};
///
/// let repo = RepositoryFactory::create(RepositoryType::Local).unwrap();
/// drop(repo);
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create an in-memory repository.
    #[cfg(feature = "local-repo")]
    pub fn create_local() -> super::repositories::LocalRepository {
        super::repositories::LocalRepository::new()
    }

    /// Create a repository instance based on type.
    pub fn create(repo_type: RepositoryType) -> RepositoryResult<Arc<dyn FullRepository>> {
        match repo_type {
            #[cfg(feature = "local-repo")]
            RepositoryType::Local => Ok(Arc::new(Self::create_local())),
            #[cfg(not(feature = "local-repo"))]
            RepositoryType::Local => Err(super::repository::RepositoryError::ConfigurationError(
                "local-repo feature is disabled".to_string(),
            )),
        }
    }
}
