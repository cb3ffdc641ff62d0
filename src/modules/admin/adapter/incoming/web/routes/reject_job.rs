use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::admin::application::use_cases::reject_job::RejectJobError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
pub struct RejectJobResponse {
    pub message: String,
}

/// Turns down a posting. Rejection deletes the row; there is no rejected
/// state to revisit later.
#[delete("/api/admin/jobs/reject/{id}")]
pub async fn reject_job_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let job_id = path.into_inner();
    let actor_id = admin.user.id;

    match data.admin.reject_job.execute(admin.user, job_id).await {
        Ok(()) => {
            info!(admin_id = %actor_id, job_id = %job_id, "Job rejected");
            ApiResponse::success(RejectJobResponse {
                message: "Job rejected and deleted".to_string(),
            })
        }

        Err(RejectJobError::Forbidden) => {
            ApiResponse::forbidden("ADMIN_ONLY", "Access denied. Admins only.")
        }

        Err(RejectJobError::NotFound) => ApiResponse::not_found("JOB_NOT_FOUND", "Job not found"),

        Err(RejectJobError::RepositoryError(ref e)) => {
            error!(job_id = %job_id, error = %e, "Failed to reject job");
            ApiResponse::internal_error()
        }
    }
}
