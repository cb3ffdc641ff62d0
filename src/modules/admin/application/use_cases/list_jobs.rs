use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::domain::policy::{self, Action};
use crate::modules::jobs::application::ports::outgoing::job_query::{
    JobQuery, JobQueryError, JobWithPosterView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListJobsError {
    #[error("Only admins may read the review queue")]
    Forbidden,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait IListJobsUseCase {
    async fn execute(&self, actor: User) -> Result<Vec<JobWithPosterView>, ListJobsError>;
}

/// Every posting, verified or not, joined to its poster for review.
pub struct ListJobsService<Q>
where
    Q: JobQuery,
{
    job_query: Q,
}

impl<Q> ListJobsService<Q>
where
    Q: JobQuery,
{
    pub fn new(job_query: Q) -> Self {
        Self { job_query }
    }
}

#[async_trait]
impl<Q> IListJobsUseCase for ListJobsService<Q>
where
    Q: JobQuery + Send + Sync,
{
    async fn execute(&self, actor: User) -> Result<Vec<JobWithPosterView>, ListJobsError> {
        if !policy::allows(&actor, Action::ReadAdminListing) {
            return Err(ListJobsError::Forbidden);
        }

        self.job_query
            .list_all()
            .await
            .map_err(|JobQueryError::DatabaseError(msg)| ListJobsError::QueryFailed(msg))
    }
}
