use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::domain::policy::{self, Action};
use crate::modules::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApproveAlumniError {
    #[error("Only admins may review alumni claims")]
    Forbidden,

    #[error("Pending alumni not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IApproveAlumniUseCase {
    async fn execute(&self, actor: User, user_id: Uuid) -> Result<User, ApproveAlumniError>;
}

/// Settles a pending claim as approved. The store's conditional update is
/// the arbiter: when two admins race on the same claim, exactly one verdict
/// lands and the other comes back `NotFound`.
pub struct ApproveAlumniService<R>
where
    R: UserRepository,
{
    user_repository: R,
}

impl<R> ApproveAlumniService<R>
where
    R: UserRepository,
{
    pub fn new(user_repository: R) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R> IApproveAlumniUseCase for ApproveAlumniService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, actor: User, user_id: Uuid) -> Result<User, ApproveAlumniError> {
        if !policy::allows(&actor, Action::ReviewAlumni) {
            return Err(ApproveAlumniError::Forbidden);
        }

        self.user_repository
            .approve_pending_alumni(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ApproveAlumniError::NotFound,
                other => ApproveAlumniError::RepositoryError(other.to_string()),
            })
    }
}
