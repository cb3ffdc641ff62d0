use actix_web::{get, web, Responder};
use tracing::error;

use crate::events::application::use_cases::get_events::GetEventsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public event calendar, soonest first.
#[get("/api/events")]
pub async fn get_events_handler(data: web::Data<AppState>) -> impl Responder {
    match data.events.get_list.execute().await {
        Ok(events) => ApiResponse::success(events),

        Err(GetEventsError::QueryFailed(ref e)) => {
            error!(error = %e, "Failed to load events");
            ApiResponse::internal_error()
        }
    }
}
