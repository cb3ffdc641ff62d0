use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::domain::policy::{self, Action};
use crate::modules::jobs::application::ports::outgoing::job_repository::{
    JobRecord, JobRepository, JobRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum VerifyJobError {
    #[error("Only admins may review job postings")]
    Forbidden,

    #[error("Job not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IVerifyJobUseCase {
    async fn execute(&self, actor: User, job_id: Uuid) -> Result<JobRecord, VerifyJobError>;
}

/// Approves a posting out of the review queue and onto the public board.
pub struct VerifyJobService<R>
where
    R: JobRepository,
{
    job_repository: R,
}

impl<R> VerifyJobService<R>
where
    R: JobRepository,
{
    pub fn new(job_repository: R) -> Self {
        Self { job_repository }
    }
}

#[async_trait]
impl<R> IVerifyJobUseCase for VerifyJobService<R>
where
    R: JobRepository + Send + Sync,
{
    async fn execute(&self, actor: User, job_id: Uuid) -> Result<JobRecord, VerifyJobError> {
        if !policy::allows(&actor, Action::ReviewJob) {
            return Err(VerifyJobError::Forbidden);
        }

        self.job_repository
            .set_verified(job_id)
            .await
            .map_err(|e| match e {
                JobRepositoryError::NotFound => VerifyJobError::NotFound,
                JobRepositoryError::DatabaseError(msg) => VerifyJobError::RepositoryError(msg),
            })
    }
}
