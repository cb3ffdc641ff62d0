use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::admin::application::use_cases::moderate_post::ModeratePostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
pub struct ModeratePostResponse {
    pub message: String,
}

/// Removes any post by id, no ownership involved. Comments and likes
/// cascade away with the row.
#[delete("/api/admin/posts/{id}")]
pub async fn moderate_post_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();
    let actor_id = admin.user.id;

    match data.admin.moderate_post.execute(admin.user, post_id).await {
        Ok(()) => {
            info!(admin_id = %actor_id, post_id = %post_id, "Post removed by moderation");
            ApiResponse::success(ModeratePostResponse {
                message: "Post deleted successfully".to_string(),
            })
        }

        Err(ModeratePostError::Forbidden) => {
            ApiResponse::forbidden("ADMIN_ONLY", "Access denied. Admins only.")
        }

        Err(ModeratePostError::NotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }

        Err(ModeratePostError::RepositoryError(ref e)) => {
            error!(post_id = %post_id, error = %e, "Failed to remove post");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value as JsonValue;

    use crate::auth::application::domain::entities::User;
    use crate::modules::admin::application::use_cases::moderate_post::IModeratePostUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
    use crate::tests::support::auth_helper::test_helpers::create_test_jwt_service;
    use crate::tests::support::stubs::StubUserQuery;
    use crate::tests::support::user_fixtures::{admin_user, alumni_user};

    struct MockModeratePost {
        result: Result<(), ModeratePostError>,
    }

    #[async_trait]
    impl IModeratePostUseCase for MockModeratePost {
        async fn execute(&self, _actor: User, _post_id: Uuid) -> Result<(), ModeratePostError> {
            self.result.clone()
        }
    }

    async fn delete_as(user: User, use_case: MockModeratePost) -> (u16, JsonValue) {
        let jwt = create_test_jwt_service();
        let token = jwt.generate_access_token(user.id).unwrap();

        let app_state = TestAppStateBuilder::default()
            .with_token_provider(jwt)
            .with_user_query(StubUserQuery::with_user(user))
            .with_moderate_post(use_case)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(moderate_post_handler)).await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/posts/{}", Uuid::new_v4()))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body: JsonValue = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_moderate_post_removes_any_post() {
        let (status, body) = delete_as(admin_user(), MockModeratePost { result: Ok(()) }).await;

        assert_eq!(status, StatusCode::OK.as_u16());
        assert_eq!(body["data"]["message"], "Post deleted successfully");
    }

    #[actix_web::test]
    async fn test_moderate_post_unknown_id_is_not_found() {
        let (status, body) = delete_as(
            admin_user(),
            MockModeratePost {
                result: Err(ModeratePostError::NotFound),
            },
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND.as_u16());
        assert_eq!(body["error"]["code"], "POST_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_moderate_post_rejects_non_admins() {
        let (status, body) = delete_as(alumni_user(), MockModeratePost { result: Ok(()) }).await;

        assert_eq!(status, StatusCode::FORBIDDEN.as_u16());
        assert_eq!(body["error"]["code"], "ADMIN_ONLY");
    }

    #[actix_web::test]
    async fn test_moderate_post_repository_failure_is_500() {
        let (status, body) = delete_as(
            admin_user(),
            MockModeratePost {
                result: Err(ModeratePostError::RepositoryError("connection lost".to_string())),
            },
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR.as_u16());
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
