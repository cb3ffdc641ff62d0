use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::donations::application::use_cases::delete_donation::DeleteDonationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
pub struct DeleteDonationResponse {
    pub message: String,
}

#[delete("/api/donations/{id}")]
pub async fn delete_donation_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let donation_id = path.into_inner();
    let actor_id = admin.user.id;

    match data.donations.delete.execute(admin.user, donation_id).await {
        Ok(()) => {
            info!(user_id = %actor_id, donation_id = %donation_id, "Donation campaign deleted");
            ApiResponse::success(DeleteDonationResponse {
                message: "Donation deleted successfully".to_string(),
            })
        }

        Err(DeleteDonationError::Forbidden) => {
            ApiResponse::forbidden("ADMIN_ONLY", "Access denied. Admins only.")
        }

        Err(DeleteDonationError::NotFound) => {
            ApiResponse::not_found("DONATION_NOT_FOUND", "Donation not found")
        }

        Err(DeleteDonationError::RepositoryError(ref e)) => {
            error!(donation_id = %donation_id, error = %e, "Failed to delete donation campaign");
            ApiResponse::internal_error()
        }
    }
}
