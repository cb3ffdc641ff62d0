use actix_web::{get, web, Responder};
use tracing::error;

use crate::profiles::application::use_cases::get_profiles::GetProfilesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public listing of every saved profile with its owner, newest first.
#[get("/api/profile/all")]
pub async fn get_all_profiles_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profiles.get_list.execute().await {
        Ok(profiles) => ApiResponse::success(profiles),

        Err(GetProfilesError::QueryFailed(ref e)) => {
            error!(error = %e, "Failed to list profiles");
            ApiResponse::internal_error()
        }
    }
}
