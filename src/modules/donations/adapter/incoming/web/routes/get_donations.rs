use actix_web::{get, web, Responder};
use tracing::error;

use crate::donations::application::use_cases::get_donations::GetDonationsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public list of donation campaigns, newest first.
#[get("/api/donations")]
pub async fn get_donations_handler(data: web::Data<AppState>) -> impl Responder {
    match data.donations.get_list.execute().await {
        Ok(donations) => ApiResponse::success(donations),

        Err(GetDonationsError::QueryFailed(ref e)) => {
            error!(error = %e, "Failed to load donations");
            ApiResponse::internal_error()
        }
    }
}
