use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::jobs::adapter::outgoing::sea_orm_entity::jobs;
use crate::modules::jobs::application::ports::outgoing::job_repository::{
    CreateJobData, JobRecord, JobRepository, JobRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct JobRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl JobRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl JobRepository for JobRepositoryPostgres {
    async fn insert(&self, data: CreateJobData) -> Result<JobRecord, JobRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = jobs::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title.trim().to_string()),
            company: Set(data.company.trim().to_string()),
            location: Set(data.location),
            description: Set(data.description),
            application_link: Set(data.application_link),
            job_type: Set(data.job_type),
            salary_range: Set(data.salary_range),
            is_verified: Set(data.is_verified),
            created_by: Set(data.created_by),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_record(result))
    }

    async fn set_verified(&self, job_id: Uuid) -> Result<JobRecord, JobRepositoryError> {
        let model = jobs::ActiveModel {
            is_verified: Set(true),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let results = jobs::Entity::update_many()
            .set(model)
            .filter(jobs::Column::Id.eq(job_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(JobRepositoryError::NotFound)?;

        Ok(model_to_record(result))
    }

    async fn delete(&self, job_id: Uuid) -> Result<(), JobRepositoryError> {
        let result = jobs::Entity::delete_by_id(job_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(JobRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_record(model: jobs::Model) -> JobRecord {
    JobRecord {
        id: model.id,
        title: model.title,
        company: model.company,
        location: model.location,
        description: model.description,
        application_link: model.application_link,
        job_type: model.job_type,
        salary_range: model.salary_range,
        is_verified: model.is_verified,
        created_by: model.created_by,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> JobRepositoryError {
    JobRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
