use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::profiles::application::use_cases::get_own_profile::GetOwnProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// The caller's own profile page. Accounts that never saved a profile still
/// get their name, email and the default avatar.
#[get("/api/profile")]
pub async fn get_profile_handler(
    auth_user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = auth_user.user.id;

    match data.profiles.get_own.execute(auth_user.user).await {
        Ok(view) => ApiResponse::success(view),

        Err(GetOwnProfileError::QueryFailed(ref e)) => {
            error!(user_id = %user_id, error = %e, "Failed to load own profile");
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
    use crate::profiles::application::use_cases::get_own_profile::{
        IGetOwnProfileUseCase, OwnProfileView,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
    use crate::tests::support::auth_helper::test_helpers::create_test_jwt_service;
    use crate::tests::support::stubs::StubUserQuery;
    use crate::tests::support::user_fixtures::alumni_user;

    struct MockGetOwnProfile {
        result: Result<OwnProfileView, GetOwnProfileError>,
    }

    #[async_trait]
    impl IGetOwnProfileUseCase for MockGetOwnProfile {
        async fn execute(&self, _user: User) -> Result<OwnProfileView, GetOwnProfileError> {
            self.result.clone()
        }
    }

    fn filled_view() -> OwnProfileView {
        OwnProfileView {
            full_name: "Ravi Sharma".to_string(),
            email: "ravi@example.com".to_string(),
            photo: "https://cdn.example/ravi.png".to_string(),
            graduation_year: Some(2015),
            department: Some("CSE".to_string()),
            company: Some("Initech".to_string()),
            designation: Some("Staff Engineer".to_string()),
            bio: None,
            location: None,
            linkedin: None,
            github: None,
        }
    }

    async fn get_as(user: User, use_case: MockGetOwnProfile) -> (u16, JsonValue) {
        let jwt = create_test_jwt_service();
        let token = jwt.generate_access_token(user.id).unwrap();

        let app_state = TestAppStateBuilder::default()
            .with_token_provider(jwt)
            .with_user_query(StubUserQuery::with_user(user))
            .with_get_own_profile(use_case)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_profile_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/profile")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body: JsonValue = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_get_profile_returns_merged_view() {
        let (status, body) = get_as(
            alumni_user(),
            MockGetOwnProfile {
                result: Ok(filled_view()),
            },
        )
        .await;

        assert_eq!(status, StatusCode::OK.as_u16());
        assert_eq!(body["data"]["full_name"], "Ravi Sharma");
        assert_eq!(body["data"]["designation"], "Staff Engineer");
        assert_eq!(body["data"]["graduation_year"], 2015);
    }

    #[actix_web::test]
    async fn test_get_profile_omits_unset_fields() {
        let mut view = filled_view();
        view.designation = None;
        view.graduation_year = None;
        view.department = None;
        view.company = None;

        let (status, body) = get_as(alumni_user(), MockGetOwnProfile { result: Ok(view) }).await;

        assert_eq!(status, StatusCode::OK.as_u16());
        assert!(body["data"].get("designation").is_none());
        assert!(body["data"].get("graduation_year").is_none());
        assert_eq!(body["data"]["email"], "ravi@example.com");
    }

    #[actix_web::test]
    async fn test_get_profile_query_error_returns_500() {
        let (status, body) = get_as(
            alumni_user(),
            MockGetOwnProfile {
                result: Err(GetOwnProfileError::QueryFailed("db down".to_string())),
            },
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR.as_u16());
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }

    #[actix_web::test]
    async fn test_get_profile_requires_authentication() {
        let app_state = TestAppStateBuilder::default().build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_profile_handler)).await;

        let req = test::TestRequest::get().uri("/api/profile").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: JsonValue = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "MISSING_AUTH_HEADER");
    }
}
