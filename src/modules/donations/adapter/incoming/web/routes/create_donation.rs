use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::donations::application::use_cases::create_donation::{
    CreateDonationError, CreateDonationInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct CreateDonationDto {
    pub title: String,
    pub description: String,
    pub goal_amount: i64,
    pub image_url: Option<String>,
    pub qr_code_url: Option<String>,
}

#[post("/api/donations")]
pub async fn create_donation_handler(
    admin: AdminUser,
    req: web::Json<CreateDonationDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let actor_id = admin.user.id;

    let input = CreateDonationInput {
        title: dto.title,
        description: dto.description,
        goal_amount: dto.goal_amount,
        image_url: dto.image_url,
        qr_code_url: dto.qr_code_url,
    };

    match data.donations.create.execute(admin.user, input).await {
        Ok(donation) => {
            info!(user_id = %actor_id, donation_id = %donation.id, "Donation campaign created");
            ApiResponse::created(donation)
        }

        Err(CreateDonationError::Forbidden) => {
            warn!(user_id = %actor_id, "Donation campaign creation refused");
            ApiResponse::forbidden("ADMIN_ONLY", "Access denied. Admins only.")
        }

        Err(err @ CreateDonationError::MissingFields) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
        }

        Err(CreateDonationError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to store donation campaign");
            ApiResponse::internal_error()
        }
    }
}
