use async_trait::async_trait;

use crate::auth::application::domain::entities::User;
use crate::auth::application::domain::policy;
use crate::modules::jobs::application::ports::outgoing::job_repository::{
    CreateJobData, JobRecord, JobRepository, JobRepositoryError,
};

#[derive(Debug, Clone)]
pub struct CreateJobInput {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub application_link: Option<String>,
    pub job_type: Option<String>,
    pub salary_range: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateJobError {
    #[error("Title and company are required")]
    MissingFields,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateJobUseCase {
    async fn execute(&self, actor: User, input: CreateJobInput)
        -> Result<JobRecord, CreateJobError>;
}

pub struct CreateJobService<R>
where
    R: JobRepository,
{
    job_repository: R,
}

impl<R> CreateJobService<R>
where
    R: JobRepository,
{
    pub fn new(job_repository: R) -> Self {
        Self { job_repository }
    }
}

#[async_trait]
impl<R> ICreateJobUseCase for CreateJobService<R>
where
    R: JobRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: User,
        input: CreateJobInput,
    ) -> Result<JobRecord, CreateJobError> {
        if input.title.trim().is_empty() || input.company.trim().is_empty() {
            return Err(CreateJobError::MissingFields);
        }

        let data = CreateJobData {
            created_by: actor.id,
            title: input.title,
            company: input.company,
            location: input.location,
            description: input.description,
            application_link: input.application_link,
            job_type: input.job_type,
            salary_range: input.salary_range,
            is_verified: policy::job_verified_on_creation(&actor),
        };

        self.job_repository.insert(data).await.map_err(|e| match e {
            JobRepositoryError::NotFound => {
                CreateJobError::RepositoryError("unexpected not found on insert".to_string())
            }
            JobRepositoryError::DatabaseError(msg) => CreateJobError::RepositoryError(msg),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;
    use uuid::Uuid;

    use crate::auth::application::domain::entities::AccountStatus;

    struct MockJobRepo {
        result: Result<JobRecord, JobRepositoryError>,
        last_insert: Mutex<Option<CreateJobData>>,
    }

    impl MockJobRepo {
        fn returning(result: Result<JobRecord, JobRepositoryError>) -> Self {
            Self {
                result,
                last_insert: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl JobRepository for MockJobRepo {
        async fn insert(&self, data: CreateJobData) -> Result<JobRecord, JobRepositoryError> {
            *self.last_insert.lock().unwrap() = Some(data);
            self.result.clone()
        }

        async fn set_verified(&self, _job_id: Uuid) -> Result<JobRecord, JobRepositoryError> {
            unimplemented!("not needed for create_job tests")
        }

        async fn delete(&self, _job_id: Uuid) -> Result<(), JobRepositoryError> {
            unimplemented!("not needed for create_job tests")
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

    fn sample_record(created_by: Uuid, is_verified: bool) -> JobRecord {
        JobRecord {
            id: Uuid::new_v4(),
            title: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            location: Some("Remote".to_string()),
            description: None,
            application_link: None,
            job_type: Some("Full-time".to_string()),
            salary_range: None,
            is_verified,
            created_by,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn valid_input() -> CreateJobInput {
        CreateJobInput {
            title: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            location: Some("Remote".to_string()),
            description: None,
            application_link: None,
            job_type: Some("Full-time".to_string()),
            salary_range: None,
        }
    }

    #[tokio::test]
    async fn test_alumni_posting_starts_unverified() {
        let actor = user_with(AccountStatus::Alumni);
        let repo = MockJobRepo::returning(Ok(sample_record(actor.id, false)));
        let service = CreateJobService::new(repo);

        let record = service.execute(actor.clone(), valid_input()).await.unwrap();

        assert!(!record.is_verified);
        let inserted = service
            .job_repository
            .last_insert
            .lock()
            .unwrap()
            .clone()
            .unwrap();
        assert!(!inserted.is_verified);
        assert_eq!(inserted.created_by, actor.id);
    }

    #[tokio::test]
    async fn test_admin_posting_is_born_verified() {
        let actor = user_with(AccountStatus::Admin);
        let repo = MockJobRepo::returning(Ok(sample_record(actor.id, true)));
        let service = CreateJobService::new(repo);

        service.execute(actor, valid_input()).await.unwrap();

        let inserted = service
            .job_repository
            .last_insert
            .lock()
            .unwrap()
            .clone()
            .unwrap();
        assert!(inserted.is_verified);
    }

    #[tokio::test]
    async fn test_blank_title_is_rejected_before_insert() {
        let repo = MockJobRepo::returning(Ok(sample_record(Uuid::new_v4(), false)));
        let service = CreateJobService::new(repo);

        let mut input = valid_input();
        input.title = "   ".to_string();

        let err = service
            .execute(user_with(AccountStatus::Alumni), input)
            .await
            .unwrap_err();

        assert!(matches!(err, CreateJobError::MissingFields));
        assert!(service.job_repository.last_insert.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_blank_company_is_rejected() {
        let repo = MockJobRepo::returning(Ok(sample_record(Uuid::new_v4(), false)));
        let service = CreateJobService::new(repo);

        let mut input = valid_input();
        input.company = String::new();

        let err = service
            .execute(user_with(AccountStatus::Alumni), input)
            .await
            .unwrap_err();

        assert!(matches!(err, CreateJobError::MissingFields));
    }

    #[tokio::test]
    async fn test_maps_database_error() {
        let repo = MockJobRepo::returning(Err(JobRepositoryError::DatabaseError(
            "db down".to_string(),
        )));
        let service = CreateJobService::new(repo);

        let err = service
            .execute(user_with(AccountStatus::Alumni), valid_input())
            .await
            .unwrap_err();

        assert!(matches!(err, CreateJobError::RepositoryError(msg) if msg == "db down"));
    }
}
