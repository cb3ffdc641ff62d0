use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::VerifiedAlumni;
use crate::jobs::application::use_cases::create_job::{CreateJobError, CreateJobInput};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct CreateJobDto {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub application_link: Option<String>,
    pub job_type: Option<String>,
    pub salary_range: Option<String>,
}

/// Post a job opening. Alumni postings wait in the review queue until an
/// admin verifies them; admin postings go live immediately.
#[post("/api/jobs")]
pub async fn create_job_handler(
    alumni: VerifiedAlumni,
    req: web::Json<CreateJobDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let poster_id = alumni.user.id;

    let input = CreateJobInput {
        title: dto.title,
        company: dto.company,
        location: dto.location,
        description: dto.description,
        application_link: dto.application_link,
        job_type: dto.job_type,
        salary_range: dto.salary_range,
    };

    match data.jobs.create.execute(alumni.user, input).await {
        Ok(job) => {
            info!(user_id = %poster_id, job_id = %job.id, verified = job.is_verified, "Job posted");
            ApiResponse::created(job)
        }

        Err(err @ CreateJobError::MissingFields) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
        }

        Err(CreateJobError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to store job");
            ApiResponse::internal_error()
        }
    }
}
