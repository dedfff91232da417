//! Factory for creating repository instances.

use std::str::FromStr;
use std::sync::Arc;

use super::repositories::LocalRepository;
use super::repository::HearingRepository;

/// Supported repository backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// In-memory repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" | "memory" | "in-memory" => Ok(RepositoryType::Local),
            other => Err(format!("Unknown repository type: {}", other)),
        }
    }
}

/// Factory for repository instances. A SQL backend slots in here behind its
/// own feature flag without touching callers.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create an in-memory repository.
    pub fn create_local() -> Arc<dyn HearingRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create a repository of the requested type.
    pub fn create(repo_type: RepositoryType) -> Arc<dyn HearingRepository> {
        match repo_type {
            RepositoryType::Local => Self::create_local(),
        }
    }
}
