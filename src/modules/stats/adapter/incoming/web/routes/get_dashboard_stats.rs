use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::stats::application::use_cases::dashboard_stats::DashboardStatsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Headline counts for the landing dashboard. Any signed-in account may
/// read them; there is nothing per-user in the numbers.
#[get("/api/stats/dashboard")]
pub async fn get_dashboard_stats_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.stats.dashboard.execute().await {
        Ok(stats) => ApiResponse::success(stats),

        Err(DashboardStatsError::QueryFailed(ref e)) => {
            error!(error = %e, "Failed to gather dashboard stats");
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
    use crate::modules::stats::application::use_cases::dashboard_stats::{
        DashboardStats, IDashboardStatsUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
    use crate::tests::support::auth_helper::test_helpers::create_test_jwt_service;
    use crate::tests::support::stubs::StubUserQuery;
    use crate::tests::support::user_fixtures::student_user;

    struct MockDashboardStats {
        result: Result<DashboardStats, DashboardStatsError>,
    }

    #[async_trait]
    impl IDashboardStatsUseCase for MockDashboardStats {
        async fn execute(&self) -> Result<DashboardStats, DashboardStatsError> {
            self.result.clone()
        }
    }

    async fn get_as(user: User, use_case: MockDashboardStats) -> (u16, JsonValue) {
        let jwt = create_test_jwt_service();
        let token = jwt.generate_access_token(user.id).unwrap();

        let app_state = TestAppStateBuilder::default()
            .with_token_provider(jwt)
            .with_user_query(StubUserQuery::with_user(user))
            .with_dashboard_stats(use_case)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_dashboard_stats_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/stats/dashboard")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body: JsonValue = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_dashboard_stats_for_any_signed_in_account() {
        let (status, body) = get_as(
            student_user(),
            MockDashboardStats {
                result: Ok(DashboardStats {
                    total_alumni: 120,
                    upcoming_events: 4,
                    active_jobs: 7,
                    donations: 15,
                }),
            },
        )
        .await;

        assert_eq!(status, StatusCode::OK.as_u16());
        assert_eq!(body["data"]["totalAlumni"], 120);
        assert_eq!(body["data"]["upcomingEvents"], 4);
        assert_eq!(body["data"]["activeJobs"], 7);
        assert_eq!(body["data"]["donations"], 15);
    }

    #[actix_web::test]
    async fn test_dashboard_stats_query_failure_is_500() {
        let (status, body) = get_as(
            student_user(),
            MockDashboardStats {
                result: Err(DashboardStatsError::QueryFailed("connection lost".to_string())),
            },
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR.as_u16());
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }

    #[actix_web::test]
    async fn test_dashboard_stats_requires_authentication() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_dashboard_stats_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/stats/dashboard")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: JsonValue = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "MISSING_AUTH_HEADER");
    }
}
