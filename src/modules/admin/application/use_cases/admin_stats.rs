use async_trait::async_trait;
use serde::Serialize;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::domain::policy::{self, Action};
use crate::modules::auth::application::ports::outgoing::user_query::UserQuery;
use crate::modules::events::application::ports::outgoing::event_query::EventQuery;
use crate::modules::jobs::application::ports::outgoing::job_query::JobQuery;
use crate::modules::posts::application::ports::outgoing::post_query::PostQuery;

#[derive(Debug, Clone, Serialize)]
pub struct AdminStats {
    pub users: u64,
    pub posts: u64,
    pub events: u64,
    pub jobs: u64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminStatsError {
    #[error("Only admins may read platform stats")]
    Forbidden,

    #[error("Query error: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait IAdminStatsUseCase {
    async fn execute(&self, actor: User) -> Result<AdminStats, AdminStatsError>;
}

/// Row counts for the admin overview, gathered concurrently. One failed
/// count fails the whole response rather than reporting partial numbers.
pub struct AdminStatsService<U, P, E, J>
where
    U: UserQuery,
    P: PostQuery,
    E: EventQuery,
    J: JobQuery,
{
    user_query: U,
    post_query: P,
    event_query: E,
    job_query: J,
}

impl<U, P, E, J> AdminStatsService<U, P, E, J>
where
    U: UserQuery,
    P: PostQuery,
    E: EventQuery,
    J: JobQuery,
{
    pub fn new(user_query: U, post_query: P, event_query: E, job_query: J) -> Self {
        Self {
            user_query,
            post_query,
            event_query,
            job_query,
        }
    }
}

#[async_trait]
impl<U, P, E, J> IAdminStatsUseCase for AdminStatsService<U, P, E, J>
where
    U: UserQuery + Send + Sync,
    P: PostQuery + Send + Sync,
    E: EventQuery + Send + Sync,
    J: JobQuery + Send + Sync,
{
    async fn execute(&self, actor: User) -> Result<AdminStats, AdminStatsError> {
        if !policy::allows(&actor, Action::ReadAdminListing) {
            return Err(AdminStatsError::Forbidden);
        }

        let (users, posts, events, jobs) = tokio::try_join!(
            async {
                self.user_query
                    .count_users()
                    .await
                    .map_err(|e| AdminStatsError::QueryFailed(e.to_string()))
            },
            async {
                self.post_query
                    .count_posts()
                    .await
                    .map_err(|e| AdminStatsError::QueryFailed(e.to_string()))
            },
            async {
                self.event_query
                    .count_events()
                    .await
                    .map_err(|e| AdminStatsError::QueryFailed(e.to_string()))
            },
            async {
                self.job_query
                    .count_jobs()
                    .await
                    .map_err(|e| AdminStatsError::QueryFailed(e.to_string()))
            },
        )?;

        Ok(AdminStats {
            users,
            posts,
            events,
            jobs,
        })
    }
}
