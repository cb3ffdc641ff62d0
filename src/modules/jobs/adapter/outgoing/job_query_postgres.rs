use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::jobs::adapter::outgoing::sea_orm_entity::jobs;
use crate::modules::jobs::application::ports::outgoing::job_query::{
    JobPosterView, JobQuery, JobQueryError, JobWithPosterView,
};
use crate::modules::jobs::application::ports::outgoing::job_repository::JobRecord;

// ============================================================================
// Query Implementation
// ============================================================================

/// Read side of the job board. The public listing returns bare rows; the
/// review queue joins each row to its poster so reviewers can see who
/// submitted it.
#[derive(Clone)]
pub struct JobQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl JobQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl JobQuery for JobQueryPostgres {
    async fn list_verified(&self) -> Result<Vec<JobRecord>, JobQueryError> {
        let models = jobs::Entity::find()
            .filter(jobs::Column::IsVerified.eq(true))
            .order_by_desc(jobs::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_record).collect())
    }

    async fn list_all(&self) -> Result<Vec<JobWithPosterView>, JobQueryError> {
        let rows = jobs::Entity::find()
            .find_also_related(users::Entity)
            .order_by_desc(jobs::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter()
            .map(|(job, poster)| {
                let poster = require_poster(poster, job.id)?;
                Ok(build_job_view(job, poster))
            })
            .collect()
    }

    async fn count_jobs(&self) -> Result<u64, JobQueryError> {
        jobs::Entity::find()
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn count_verified(&self) -> Result<u64, JobQueryError> {
        jobs::Entity::find()
            .filter(jobs::Column::IsVerified.eq(true))
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Jobs cascade-delete with their poster, so a missing poster row means the
/// data is corrupt rather than merely stale.
fn require_poster(poster: Option<users::Model>, job_id: Uuid) -> Result<users::Model, JobQueryError> {
    poster.ok_or_else(|| JobQueryError::DatabaseError(format!("job {} has no poster row", job_id)))
}

fn build_job_view(job: jobs::Model, poster: users::Model) -> JobWithPosterView {
    JobWithPosterView {
        id: job.id,
        title: job.title,
        company: job.company,
        location: job.location,
        description: job.description,
        application_link: job.application_link,
        job_type: job.job_type,
        salary_range: job.salary_range,
        is_verified: job.is_verified,
        created_by: JobPosterView {
            id: poster.id,
            name: poster.name,
            email: poster.email,
            role: poster.role,
        },
        created_at: job.created_at.into(),
        updated_at: job.updated_at.into(),
    }
}

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

fn map_db_err(e: DbErr) -> JobQueryError {
    JobQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
