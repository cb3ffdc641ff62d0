use actix_web::{get, web, Responder};
use tracing::error;

use crate::profiles::application::use_cases::alumni_directory::AlumniDirectoryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public alumni directory. Every verified alumnus appears, with profile
/// fields merged in where present.
#[get("/api/alumni")]
pub async fn get_alumni_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profiles.directory.execute().await {
        Ok(entries) => ApiResponse::success(entries),

        Err(AlumniDirectoryError::QueryFailed(ref e)) => {
            error!(error = %e, "Failed to build alumni directory");
            ApiResponse::internal_error()
        }
    }
}
