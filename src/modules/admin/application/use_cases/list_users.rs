use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::domain::policy::{self, Action};
use crate::modules::auth::application::ports::outgoing::user_query::UserQuery;
use crate::modules::auth::application::use_cases::user_view::UserView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListUsersError {
    #[error("Only admins may list accounts")]
    Forbidden,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait IListUsersUseCase {
    async fn execute(&self, actor: User) -> Result<Vec<UserView>, ListUsersError>;
}

pub struct ListUsersService<Q>
where
    Q: UserQuery,
{
    user_query: Q,
}

impl<Q> ListUsersService<Q>
where
    Q: UserQuery,
{
    pub fn new(user_query: Q) -> Self {
        Self { user_query }
    }
}

#[async_trait]
impl<Q> IListUsersUseCase for ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, actor: User) -> Result<Vec<UserView>, ListUsersError> {
        if !policy::allows(&actor, Action::ReadAdminListing) {
            return Err(ListUsersError::Forbidden);
        }

        let users = self
            .user_query
            .list_all()
            .await
            .map_err(|e| ListUsersError::QueryFailed(e.to_string()))?;

        Ok(users.iter().map(UserView::from).collect())
    }
}
