use async_trait::async_trait;

use crate::modules::jobs::application::ports::outgoing::job_query::{JobQuery, JobQueryError};
use crate::modules::jobs::application::ports::outgoing::job_repository::JobRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetJobsError {
    #[error("Query error: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait IGetJobsUseCase {
    async fn execute(&self) -> Result<Vec<JobRecord>, GetJobsError>;
}

/// Public board: verified postings only.
pub struct GetJobsService<Q>
where
    Q: JobQuery,
{
    job_query: Q,
}

impl<Q> GetJobsService<Q>
where
    Q: JobQuery,
{
    pub fn new(job_query: Q) -> Self {
        Self { job_query }
    }
}

#[async_trait]
impl<Q> IGetJobsUseCase for GetJobsService<Q>
where
    Q: JobQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<JobRecord>, GetJobsError> {
        self.job_query
            .list_verified()
            .await
            .map_err(|JobQueryError::DatabaseError(msg)| GetJobsError::QueryFailed(msg))
    }
}
