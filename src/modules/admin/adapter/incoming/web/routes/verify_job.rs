use actix_web::{put, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::jobs::application::ports::outgoing::job_repository::JobRecord;
use crate::modules::admin::application::use_cases::verify_job::VerifyJobError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
pub struct VerifyJobResponse {
    pub message: String,
    pub job: JobRecord,
}

/// Approves a posting out of the review queue and onto the public board.
#[put("/api/admin/jobs/verify/{id}")]
pub async fn verify_job_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let job_id = path.into_inner();
    let actor_id = admin.user.id;

    match data.admin.verify_job.execute(admin.user, job_id).await {
        Ok(job) => {
            info!(admin_id = %actor_id, job_id = %job_id, "Job verified");
            ApiResponse::success(VerifyJobResponse {
                message: "Job verified successfully".to_string(),
                job,
            })
        }

        Err(VerifyJobError::Forbidden) => {
            ApiResponse::forbidden("ADMIN_ONLY", "Access denied. Admins only.")
        }

        Err(VerifyJobError::NotFound) => ApiResponse::not_found("JOB_NOT_FOUND", "Job not found"),

        Err(VerifyJobError::RepositoryError(ref e)) => {
            error!(job_id = %job_id, error = %e, "Failed to verify job");
            ApiResponse::internal_error()
        }
    }
}
