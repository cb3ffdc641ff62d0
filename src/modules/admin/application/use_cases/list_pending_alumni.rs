use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::domain::policy::{self, Action};
use crate::modules::auth::application::ports::outgoing::user_query::UserQuery;
use crate::modules::auth::application::use_cases::user_view::UserView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListPendingAlumniError {
    #[error("Only admins may review alumni claims")]
    Forbidden,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait IListPendingAlumniUseCase {
    async fn execute(&self, actor: User) -> Result<Vec<UserView>, ListPendingAlumniError>;
}

/// The review queue: accounts that registered with alumni evidence and are
/// still waiting for a verdict.
pub struct ListPendingAlumniService<Q>
where
    Q: UserQuery,
{
    user_query: Q,
}

impl<Q> ListPendingAlumniService<Q>
where
    Q: UserQuery,
{
    pub fn new(user_query: Q) -> Self {
        Self { user_query }
    }
}

#[async_trait]
impl<Q> IListPendingAlumniUseCase for ListPendingAlumniService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, actor: User) -> Result<Vec<UserView>, ListPendingAlumniError> {
        if !policy::allows(&actor, Action::ReviewAlumni) {
            return Err(ListPendingAlumniError::Forbidden);
        }

        let pending = self
            .user_query
            .list_pending_alumni()
            .await
            .map_err(|e| ListPendingAlumniError::QueryFailed(e.to_string()))?;

        Ok(pending.iter().map(UserView::from).collect())
    }
}
