use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::user_view::UserView;
use crate::shared::api::ApiResponse;
use actix_web::{get, Responder};

/// Current user
///
/// Echo back the account resolved from the bearer token. The extractor
/// re-reads the user on every request, so role and verification state are
/// current even when the token predates an admin decision.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(("BearerAuth" = [])),
    responses(
        (
            status = 200,
            description = "Current account",
            body = inline(SuccessResponse<UserView>),
            example = json!({
                "success": true,
                "data": {
                    "id": "123e4567-e89b-12d3-a456-426614174000",
                    "name": "Asha Verma",
                    "email": "asha@example.com",
                    "role": "alumni",
                    "pendingAlumni": false,
                    "created_at": "2024-06-01T10:00:00Z"
                }
            })
        ),
        (
            status = 401,
            description = "Missing, invalid or orphaned token",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_TOKEN",
                    "message": "Invalid or expired token"
                }
            })
        ),
    )
)]
#[get("/api/auth/me")]
pub async fn fetch_me_handler(user: AuthenticatedUser) -> impl Responder {
    ApiResponse::success(UserView::from(&user.user))
}
