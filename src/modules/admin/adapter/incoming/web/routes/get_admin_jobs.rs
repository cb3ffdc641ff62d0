use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::admin::application::use_cases::list_jobs::ListJobsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Every posting, verified or not, with its poster. The review queue view.
#[get("/api/admin/jobs")]
pub async fn get_admin_jobs_handler(admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.admin.list_jobs.execute(admin.user).await {
        Ok(jobs) => ApiResponse::success(jobs),

        Err(ListJobsError::Forbidden) => {
            ApiResponse::forbidden("ADMIN_ONLY", "Access denied. Admins only.")
        }

        Err(ListJobsError::QueryFailed(ref e)) => {
            error!(error = %e, "Failed to list jobs for review");
            ApiResponse::internal_error()
        }
    }
}
