use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::domain::policy::{self, Action};
use crate::modules::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RejectAlumniError {
    #[error("Only admins may review alumni claims")]
    Forbidden,

    #[error("Pending alumni not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IRejectAlumniUseCase {
    async fn execute(&self, actor: User, user_id: Uuid) -> Result<User, RejectAlumniError>;
}

/// Settles a pending claim as rejected: the account stays a student and its
/// evidence is cleared. Same conditional-update arbitration as approval.
pub struct RejectAlumniService<R>
where
    R: UserRepository,
{
    user_repository: R,
}

impl<R> RejectAlumniService<R>
where
    R: UserRepository,
{
    pub fn new(user_repository: R) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R> IRejectAlumniUseCase for RejectAlumniService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, actor: User, user_id: Uuid) -> Result<User, RejectAlumniError> {
        if !policy::allows(&actor, Action::ReviewAlumni) {
            return Err(RejectAlumniError::Forbidden);
        }

        self.user_repository
            .reject_pending_alumni(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => RejectAlumniError::NotFound,
                other => RejectAlumniError::RepositoryError(other.to_string()),
            })
    }
}
