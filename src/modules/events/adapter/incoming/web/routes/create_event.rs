use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::events::application::use_cases::create_event::{CreateEventError, CreateEventInput};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct CreateEventDto {
    pub title: String,
    pub description: Option<String>,
    pub event_date: DateTime<Utc>,
    pub location: String,
    pub max_participants: Option<i32>,
    pub image_url: Option<String>,
    pub application_link: Option<String>,
}

#[post("/api/events")]
pub async fn create_event_handler(
    admin: AdminUser,
    req: web::Json<CreateEventDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let actor_id = admin.user.id;

    let input = CreateEventInput {
        title: dto.title,
        description: dto.description,
        event_date: dto.event_date,
        location: dto.location,
        max_participants: dto.max_participants,
        image_url: dto.image_url,
        application_link: dto.application_link,
    };

    match data.events.create.execute(admin.user, input).await {
        Ok(event) => {
            info!(user_id = %actor_id, event_id = %event.id, "Event created");
            ApiResponse::created(event)
        }

        Err(CreateEventError::Forbidden) => {
            warn!(user_id = %actor_id, "Event creation refused");
            ApiResponse::forbidden("ADMIN_ONLY", "Access denied. Admins only.")
        }

        Err(err @ CreateEventError::MissingFields) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
        }

        Err(CreateEventError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to store event");
            ApiResponse::internal_error()
        }
    }
}
