use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::posts::application::use_cases::get_posts::GetPostsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// The same feed the public sees, behind the admin gate so the moderation
/// page has one place to read from.
#[get("/api/admin/posts")]
pub async fn get_admin_posts_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.posts.get_list.execute().await {
        Ok(posts) => ApiResponse::success(posts),

        Err(GetPostsError::QueryFailed(ref e)) => {
            error!(error = %e, "Failed to list posts for moderation");
            ApiResponse::internal_error()
        }
    }
}
