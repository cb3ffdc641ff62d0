use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::admin::application::use_cases::admin_stats::AdminStatsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Row counts for the admin overview page.
#[get("/api/admin/stats")]
pub async fn get_admin_stats_handler(
    admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.admin.stats.execute(admin.user).await {
        Ok(stats) => ApiResponse::success(stats),

        Err(AdminStatsError::Forbidden) => {
            ApiResponse::forbidden("ADMIN_ONLY", "Access denied. Admins only.")
        }

        Err(AdminStatsError::QueryFailed(ref e)) => {
            error!(error = %e, "Failed to gather admin stats");
            ApiResponse::internal_error()
        }
    }
}
