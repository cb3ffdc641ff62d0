use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::events::application::use_cases::delete_event::DeleteEventError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
pub struct DeleteEventResponse {
    pub message: String,
}

#[delete("/api/events/{id}")]
pub async fn delete_event_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let event_id = path.into_inner();
    let actor_id = admin.user.id;

    match data.events.delete.execute(admin.user, event_id).await {
        Ok(()) => {
            info!(user_id = %actor_id, event_id = %event_id, "Event deleted");
            ApiResponse::success(DeleteEventResponse {
                message: "Event deleted successfully".to_string(),
            })
        }

        Err(DeleteEventError::Forbidden) => {
            ApiResponse::forbidden("ADMIN_ONLY", "Access denied. Admins only.")
        }

        Err(DeleteEventError::NotFound) => {
            ApiResponse::not_found("EVENT_NOT_FOUND", "Event not found")
        }

        Err(DeleteEventError::RepositoryError(ref e)) => {
            error!(event_id = %event_id, error = %e, "Failed to delete event");
            ApiResponse::internal_error()
        }
    }
}
