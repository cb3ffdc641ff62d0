use actix_web::{put, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::application::use_cases::user_view::UserView;
use crate::modules::admin::application::use_cases::approve_alumni::ApproveAlumniError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
pub struct ApproveAlumniResponse {
    pub message: String,
    pub user: UserView,
}

/// Accepts a pending verification claim. The account becomes a verified
/// alumnus; a 404 means the claim was already settled, possibly by another
/// admin a moment ago.
#[put("/api/admin/alumni/approve/{id}")]
pub async fn approve_alumni_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();
    let actor_id = admin.user.id;

    match data.admin.approve_alumni.execute(admin.user, user_id).await {
        Ok(user) => {
            info!(admin_id = %actor_id, user_id = %user_id, "Alumni claim approved");
            ApiResponse::success(ApproveAlumniResponse {
                message: "Alumni verified successfully".to_string(),
                user: UserView::from(&user),
            })
        }

        Err(ApproveAlumniError::Forbidden) => {
            ApiResponse::forbidden("ADMIN_ONLY", "Access denied. Admins only.")
        }

        Err(ApproveAlumniError::NotFound) => {
            ApiResponse::not_found("PENDING_ALUMNI_NOT_FOUND", "Pending alumni not found")
        }

        Err(ApproveAlumniError::RepositoryError(ref e)) => {
            error!(user_id = %user_id, error = %e, "Failed to approve alumni claim");
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
    use crate::modules::admin::application::use_cases::approve_alumni::IApproveAlumniUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
    use crate::tests::support::auth_helper::test_helpers::create_test_jwt_service;
    use crate::tests::support::stubs::StubUserQuery;
    use crate::tests::support::user_fixtures::{admin_user, alumni_user, student_user};

    struct MockApproveAlumni {
        result: Result<User, ApproveAlumniError>,
    }

    #[async_trait]
    impl IApproveAlumniUseCase for MockApproveAlumni {
        async fn execute(&self, _actor: User, _user_id: Uuid) -> Result<User, ApproveAlumniError> {
            self.result.clone()
        }
    }

    async fn put_as(user: User, use_case: MockApproveAlumni) -> (u16, JsonValue) {
        let jwt = create_test_jwt_service();
        let token = jwt.generate_access_token(user.id).unwrap();

        let app_state = TestAppStateBuilder::default()
            .with_token_provider(jwt)
            .with_user_query(StubUserQuery::with_user(user))
            .with_approve_alumni(use_case)
            .build();

        let app = test::init_service(
            App::new().app_data(app_state).service(approve_alumni_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/admin/alumni/approve/{}", Uuid::new_v4()))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body: JsonValue = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_approve_alumni_success() {
        let approved = alumni_user();
        let (status, body) = put_as(
            admin_user(),
            MockApproveAlumni {
                result: Ok(approved.clone()),
            },
        )
        .await;

        assert_eq!(status, StatusCode::OK.as_u16());
        assert_eq!(body["data"]["message"], "Alumni verified successfully");
        assert_eq!(body["data"]["user"]["role"], "alumni");
        assert_eq!(body["data"]["user"]["name"], approved.name);
    }

    #[actix_web::test]
    async fn test_approve_alumni_settled_claim_is_not_found() {
        let (status, body) = put_as(
            admin_user(),
            MockApproveAlumni {
                result: Err(ApproveAlumniError::NotFound),
            },
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND.as_u16());
        assert_eq!(body["error"]["code"], "PENDING_ALUMNI_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_approve_alumni_rejects_non_admins() {
        let (status, body) = put_as(
            student_user(),
            MockApproveAlumni {
                result: Ok(alumni_user()),
            },
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN.as_u16());
        assert_eq!(body["error"]["code"], "ADMIN_ONLY");
    }

    #[actix_web::test]
    async fn test_approve_alumni_repository_failure_is_500() {
        let (status, body) = put_as(
            admin_user(),
            MockApproveAlumni {
                result: Err(ApproveAlumniError::RepositoryError(
                    "connection lost".to_string(),
                )),
            },
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR.as_u16());
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
