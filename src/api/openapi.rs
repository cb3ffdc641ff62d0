use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{LoginRequestDto, RegisterUserRequest};
use crate::auth::application::use_cases::login_user::LoginUserResponse;
use crate::auth::application::use_cases::register_user::RegisterUserResponse;
use crate::auth::application::use_cases::user_view::UserView;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Alumni Network API",
        version = "1.0.0",
        description = "API documentation for the college alumni network platform",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::fetch_me_handler,

        // Post endpoints
        // create_post_handler,
        // get_posts_handler,
        // get_post_handler,
        // update_post_handler,
        // delete_post_handler,
        // add_comment_handler,
        // get_comments_handler,
        // toggle_like_handler,

        // Job endpoints
        // create_job_handler,
        // get_jobs_handler,

        // Event endpoints
        // create_event_handler,
        // get_events_handler,
        // delete_event_handler,

        // Donation endpoints
        // create_donation_handler,
        // get_donations_handler,
        // delete_donation_handler,

        // Story endpoints
        // create_story_handler,
        // get_stories_handler,
        // delete_story_handler,

        // Profile endpoints
        // get_own_profile_handler,
        // upsert_profile_handler,
        // get_profiles_handler,
        // alumni_directory_handler,

        // Admin endpoints
        // get_users_handler,
        // delete_user_handler,
        // get_admin_stats_handler,
        // get_pending_alumni_handler,
        // approve_alumni_handler,
        // reject_alumni_handler,
        // get_admin_jobs_handler,
        // verify_job_handler,
        // reject_job_handler,
        // get_admin_posts_handler,
        // moderate_post_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<RegisterUserResponse>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            RegisterUserRequest,
            RegisterUserResponse,
            LoginRequestDto,
            LoginUserResponse,
            UserView
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and current-user endpoints"),
        (name = "posts", description = "Community feed endpoints"),
        (name = "jobs", description = "Job board endpoints"),
        (name = "events", description = "Event listing endpoints"),
        (name = "donations", description = "Donation drive endpoints"),
        (name = "stories", description = "Success story endpoints"),
        (name = "profiles", description = "Profile and alumni directory endpoints"),
        (name = "admin", description = "Admin verification and moderation endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
