use actix_web::{get, web, Responder};
use tracing::error;

use crate::jobs::application::use_cases::get_jobs::GetJobsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public job board. Only verified postings appear here.
#[get("/api/jobs")]
pub async fn get_jobs_handler(data: web::Data<AppState>) -> impl Responder {
    match data.jobs.get_list.execute().await {
        Ok(jobs) => ApiResponse::success(jobs),

        Err(GetJobsError::QueryFailed(ref e)) => {
            error!(error = %e, "Failed to load job board");
            ApiResponse::internal_error()
        }
    }
}
