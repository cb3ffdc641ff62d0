use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::domain::policy::{self, Action};
use crate::modules::jobs::application::ports::outgoing::job_repository::{
    JobRepository, JobRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RejectJobError {
    #[error("Only admins may review job postings")]
    Forbidden,

    #[error("Job not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IRejectJobUseCase {
    async fn execute(&self, actor: User, job_id: Uuid) -> Result<(), RejectJobError>;
}

/// Rejection deletes the posting outright; there is no rejected state to
/// keep around.
pub struct RejectJobService<R>
where
    R: JobRepository,
{
    job_repository: R,
}

impl<R> RejectJobService<R>
where
    R: JobRepository,
{
    pub fn new(job_repository: R) -> Self {
        Self { job_repository }
    }
}

#[async_trait]
impl<R> IRejectJobUseCase for RejectJobService<R>
where
    R: JobRepository + Send + Sync,
{
    async fn execute(&self, actor: User, job_id: Uuid) -> Result<(), RejectJobError> {
        if !policy::allows(&actor, Action::ReviewJob) {
            return Err(RejectJobError::Forbidden);
        }

        self.job_repository.delete(job_id).await.map_err(|e| match e {
            JobRepositoryError::NotFound => RejectJobError::NotFound,
            JobRepositoryError::DatabaseError(msg) => RejectJobError::RepositoryError(msg),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    use crate::modules::auth::application::domain::entities::AccountStatus;
    use crate::modules::jobs::application::ports::outgoing::job_repository::{
        CreateJobData, JobRecord,
    };

    struct MockJobRepo {
        result: Result<(), JobRepositoryError>,
        deleted: Mutex<Option<Uuid>>,
    }

    impl MockJobRepo {
        fn returning(result: Result<(), JobRepositoryError>) -> Self {
            Self {
                result,
                deleted: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl JobRepository for MockJobRepo {
        async fn insert(&self, _data: CreateJobData) -> Result<JobRecord, JobRepositoryError> {
            unimplemented!("not needed for reject_job tests")
        }

        async fn set_verified(&self, _job_id: Uuid) -> Result<JobRecord, JobRepositoryError> {
            unimplemented!("not needed for reject_job tests")
        }

        async fn delete(&self, job_id: Uuid) -> Result<(), JobRepositoryError> {
            *self.deleted.lock().unwrap() = Some(job_id);
            self.result.clone()
        }
    }

    fn user_with(status: AccountStatus) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Asha Verma".to_string(),
            email: "asha@example.com".to_string(),
            password_hash: "$2b$10$hash".to_string(),
            status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_admin_rejects_posting() {
        let repo = MockJobRepo::returning(Ok(()));
        let service = RejectJobService::new(repo);
        let job_id = Uuid::new_v4();

        service
            .execute(user_with(AccountStatus::Admin), job_id)
            .await
            .unwrap();

        assert_eq!(*service.job_repository.deleted.lock().unwrap(), Some(job_id));
    }

    #[tokio::test]
    async fn test_non_admin_is_forbidden_before_any_delete() {
        let repo = MockJobRepo::returning(Ok(()));
        let service = RejectJobService::new(repo);

        let err = service
            .execute(user_with(AccountStatus::Alumni), Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(err, RejectJobError::Forbidden));
        assert!(service.job_repository.deleted.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_posting_is_not_found() {
        let repo = MockJobRepo::returning(Err(JobRepositoryError::NotFound));
        let service = RejectJobService::new(repo);

        let err = service
            .execute(user_with(AccountStatus::Admin), Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(err, RejectJobError::NotFound));
    }

    #[tokio::test]
    async fn test_database_error_is_propagated() {
        let repo = MockJobRepo::returning(Err(JobRepositoryError::DatabaseError(
            "connection lost".to_string(),
        )));
        let service = RejectJobService::new(repo);

        let err = service
            .execute(user_with(AccountStatus::Admin), Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(err, RejectJobError::RepositoryError(_)));
    }
}
