//! In-memory project repository for tests and offline use.

use async_trait::async_trait;
use mockable::Clock;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::project::{
    domain::{MemberId, Project, ProjectId},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};

/// Thread-safe in-memory project repository.
#[derive(Debug)]
pub struct InMemoryProjectRepository<C> {
    state: Arc<RwLock<HashMap<ProjectId, Project>>>,
    clock: Arc<C>,
}

impl<C> Clone for InMemoryProjectRepository<C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> InMemoryProjectRepository<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty repository stamping writes with `clock`.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(HashMap::new())),
            clock,
        }
    }

    /// Returns the number of stored projects.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::Persistence`] when the lock is
    /// poisoned.
    pub fn len(&self) -> ProjectRepositoryResult<usize> {
        let state = self.state.read().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.len())
    }

    /// Returns `true` when no project is stored.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::Persistence`] when the lock is
    /// poisoned.
    pub fn is_empty(&self) -> ProjectRepositoryResult<bool> {
        self.len().map(|count| count == 0)
    }
}

#[async_trait]
impl<C> ProjectRepository for InMemoryProjectRepository<C>
where
    C: Clock + Send + Sync,
{
    async fn replace(&self, project: &Project) -> ProjectRepositoryResult<Project> {
        let stored = project.with_updated_at(self.clock.utc());
        let mut state = self.state.write().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        let state = self.state.read().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(&id).cloned())
    }

    async fn list_for_member(&self, member_id: MemberId) -> ProjectRepositoryResult<Vec<Project>> {
        let state = self.state.read().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut projects: Vec<Project> = state
            .values()
            .filter(|project| project.member(member_id).is_some())
            .cloned()
            .collect();
        projects.sort_by_key(|project| (project.created_at(), project.id()));
        Ok(projects)
    }

    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state
            .remove(&id)
            .map(|_| ())
            .ok_or(ProjectRepositoryError::NotFound(id))
    }
}
