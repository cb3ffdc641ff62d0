use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::domain::policy::{self, Action};
use crate::modules::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteUserError {
    #[error("Only admins may delete accounts")]
    Forbidden,

    #[error("User not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteUserUseCase {
    async fn execute(&self, actor: User, user_id: Uuid) -> Result<(), DeleteUserError>;
}

pub struct DeleteUserService<R>
where
    R: UserRepository,
{
    user_repository: R,
}

impl<R> DeleteUserService<R>
where
    R: UserRepository,
{
    pub fn new(user_repository: R) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R> IDeleteUserUseCase for DeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, actor: User, user_id: Uuid) -> Result<(), DeleteUserError> {
        if !policy::allows(&actor, Action::DeleteUser) {
            return Err(DeleteUserError::Forbidden);
        }

        self.user_repository
            .delete_user(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => DeleteUserError::NotFound,
                other => DeleteUserError::RepositoryError(other.to_string()),
            })
    }
}
