pub mod api;
pub mod modules;
pub mod shared;
pub use modules::admin;
pub use modules::auth;
pub use modules::donations;
pub use modules::events;
pub use modules::jobs;
pub use modules::media;
pub use modules::posts;
pub use modules::profiles;
pub use modules::stats;
pub use modules::stories;
pub mod health;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::BcryptHasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::ports::outgoing::user_query::UserQuery;
use crate::auth::application::use_cases::{
    login_user::LoginUserUseCase, register_user::RegisterUserUseCase, AuthUseCases,
};

use crate::posts::adapter::outgoing::post_query_postgres::PostQueryPostgres;
use crate::posts::adapter::outgoing::post_repository_postgres::PostRepositoryPostgres;
use crate::posts::application::use_cases::{
    comment_on_post::CommentOnPostService, create_post::CreatePostService,
    delete_post::DeletePostService, get_comments::GetCommentsService, get_post::GetPostService,
    get_posts::GetPostsService, toggle_like::ToggleLikeService, update_post::UpdatePostService,
    PostUseCases,
};

use crate::media::adapter::outgoing::gcs_image_store::GcsImageStore;
use crate::media::application::use_cases::{upload_image::UploadImageService, MediaUseCases};

use crate::jobs::adapter::outgoing::job_query_postgres::JobQueryPostgres;
use crate::jobs::adapter::outgoing::job_repository_postgres::JobRepositoryPostgres;
use crate::jobs::application::use_cases::{
    create_job::CreateJobService, get_jobs::GetJobsService, JobUseCases,
};

use crate::events::adapter::outgoing::event_query_postgres::EventQueryPostgres;
use crate::events::adapter::outgoing::event_repository_postgres::EventRepositoryPostgres;
use crate::events::application::use_cases::{
    create_event::CreateEventService, delete_event::DeleteEventService,
    get_events::GetEventsService, EventUseCases,
};

use crate::donations::adapter::outgoing::donation_query_postgres::DonationQueryPostgres;
use crate::donations::adapter::outgoing::donation_repository_postgres::DonationRepositoryPostgres;
use crate::donations::application::use_cases::{
    create_donation::CreateDonationService, delete_donation::DeleteDonationService,
    get_donations::GetDonationsService, DonationUseCases,
};

use crate::stories::adapter::outgoing::story_query_postgres::StoryQueryPostgres;
use crate::stories::adapter::outgoing::story_repository_postgres::StoryRepositoryPostgres;
use crate::stories::application::use_cases::{
    create_story::CreateStoryService, delete_story::DeleteStoryService,
    get_stories::GetStoriesService, StoryUseCases,
};

use crate::profiles::adapter::outgoing::profile_query_postgres::ProfileQueryPostgres;
use crate::profiles::adapter::outgoing::profile_repository_postgres::ProfileRepositoryPostgres;
use crate::profiles::application::use_cases::{
    alumni_directory::AlumniDirectoryService, get_own_profile::GetOwnProfileService,
    get_profiles::GetProfilesService, upsert_profile::UpsertProfileService, ProfileUseCases,
};

use crate::admin::application::use_cases::{
    admin_stats::AdminStatsService, approve_alumni::ApproveAlumniService,
    delete_user::DeleteUserService, list_jobs::ListJobsService,
    list_pending_alumni::ListPendingAlumniService, list_users::ListUsersService,
    moderate_post::ModeratePostService, reject_alumni::RejectAlumniService,
    reject_job::RejectJobService, verify_job::VerifyJobService, AdminUseCases,
};

use crate::stats::application::use_cases::{dashboard_stats::DashboardStatsService, StatsUseCases};

use crate::api::openapi::ApiDoc;
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

/// Everything the request handlers reach for: the token verifier and user
/// lookup the extractors run on every request, plus one use-case group per
/// module.
#[derive(Clone)]
pub struct AppState {
    pub token_provider: Arc<dyn TokenProvider + Send + Sync>,
    pub user_query: Arc<dyn UserQuery + Send + Sync>,
    pub auth: AuthUseCases,
    pub posts: PostUseCases,
    pub media: MediaUseCases,
    pub jobs: JobUseCases,
    pub events: EventUseCases,
    pub donations: DonationUseCases,
    pub stories: StoryUseCases,
    pub profiles: ProfileUseCases,
    pub admin: AdminUseCases,
    pub stats: StatsUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Outgoing adapters, one pair per store
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let post_repo = PostRepositoryPostgres::new(Arc::clone(&db_arc));
    let post_query = PostQueryPostgres::new(Arc::clone(&db_arc));
    let job_repo = JobRepositoryPostgres::new(Arc::clone(&db_arc));
    let job_query = JobQueryPostgres::new(Arc::clone(&db_arc));
    let event_repo = EventRepositoryPostgres::new(Arc::clone(&db_arc));
    let event_query = EventQueryPostgres::new(Arc::clone(&db_arc));
    let donation_repo = DonationRepositoryPostgres::new(Arc::clone(&db_arc));
    let donation_query = DonationQueryPostgres::new(Arc::clone(&db_arc));
    let story_repo = StoryRepositoryPostgres::new(Arc::clone(&db_arc));
    let story_query = StoryQueryPostgres::new(Arc::clone(&db_arc));
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(&db_arc));
    let profile_query = ProfileQueryPostgres::new(Arc::clone(&db_arc));
    let image_store = GcsImageStore::from_env();

    let auth = AuthUseCases {
        register: Arc::new(RegisterUserUseCase::new(
            user_repo.clone(),
            BcryptHasher,
            jwt_service.clone(),
        )),
        login: Arc::new(LoginUserUseCase::new(
            user_query.clone(),
            BcryptHasher,
            jwt_service.clone(),
        )),
    };

    let posts = PostUseCases {
        create: Arc::new(CreatePostService::new(
            post_repo.clone(),
            image_store.clone(),
        )),
        get_list: Arc::new(GetPostsService::new(post_query.clone())),
        get_single: Arc::new(GetPostService::new(post_query.clone())),
        update: Arc::new(UpdatePostService::new(post_repo.clone())),
        delete: Arc::new(DeletePostService::new(post_repo.clone())),
        comment: Arc::new(CommentOnPostService::new(
            post_repo.clone(),
            post_query.clone(),
        )),
        get_comments: Arc::new(GetCommentsService::new(post_query.clone())),
        toggle_like: Arc::new(ToggleLikeService::new(post_repo.clone())),
    };

    let media = MediaUseCases {
        upload: Arc::new(UploadImageService::new(image_store.clone())),
    };

    let jobs = JobUseCases {
        create: Arc::new(CreateJobService::new(job_repo.clone())),
        get_list: Arc::new(GetJobsService::new(job_query.clone())),
    };

    let events = EventUseCases {
        create: Arc::new(CreateEventService::new(event_repo.clone())),
        get_list: Arc::new(GetEventsService::new(event_query.clone())),
        delete: Arc::new(DeleteEventService::new(event_repo)),
    };

    let donations = DonationUseCases {
        create: Arc::new(CreateDonationService::new(donation_repo.clone())),
        get_list: Arc::new(GetDonationsService::new(donation_query.clone())),
        delete: Arc::new(DeleteDonationService::new(donation_repo)),
    };

    let stories = StoryUseCases {
        create: Arc::new(CreateStoryService::new(story_repo.clone())),
        get_list: Arc::new(GetStoriesService::new(story_query)),
        delete: Arc::new(DeleteStoryService::new(story_repo)),
    };

    let profiles = ProfileUseCases {
        get_own: Arc::new(GetOwnProfileService::new(profile_query.clone())),
        upsert: Arc::new(UpsertProfileService::new(
            profile_repo,
            user_repo.clone(),
            image_store,
        )),
        get_list: Arc::new(GetProfilesService::new(profile_query.clone())),
        directory: Arc::new(AlumniDirectoryService::new(
            user_query.clone(),
            profile_query,
        )),
    };

    let admin = AdminUseCases {
        list_users: Arc::new(ListUsersService::new(user_query.clone())),
        delete_user: Arc::new(DeleteUserService::new(user_repo.clone())),
        stats: Arc::new(AdminStatsService::new(
            user_query.clone(),
            post_query,
            event_query.clone(),
            job_query.clone(),
        )),
        list_pending: Arc::new(ListPendingAlumniService::new(user_query.clone())),
        approve_alumni: Arc::new(ApproveAlumniService::new(user_repo.clone())),
        reject_alumni: Arc::new(RejectAlumniService::new(user_repo)),
        list_jobs: Arc::new(ListJobsService::new(job_query.clone())),
        verify_job: Arc::new(VerifyJobService::new(job_repo.clone())),
        reject_job: Arc::new(RejectJobService::new(job_repo)),
        moderate_post: Arc::new(ModeratePostService::new(post_repo)),
    };

    let stats = StatsUseCases {
        dashboard: Arc::new(DashboardStatsService::new(
            user_query.clone(),
            event_query,
            job_query,
            donation_query,
        )),
    };

    let state = AppState {
        token_provider: Arc::new(jwt_service),
        user_query: Arc::new(user_query),
        auth,
        posts,
        media,
        jobs,
        events,
        donations,
        stories,
        profiles,
        admin,
        stats,
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::fetch_me_handler);
    // Posts
    cfg.service(crate::posts::adapter::incoming::web::routes::create_post_handler);
    cfg.service(crate::posts::adapter::incoming::web::routes::get_posts_handler);
    cfg.service(crate::posts::adapter::incoming::web::routes::get_post_handler);
    cfg.service(crate::posts::adapter::incoming::web::routes::update_post_handler);
    cfg.service(crate::posts::adapter::incoming::web::routes::delete_post_handler);
    cfg.service(crate::posts::adapter::incoming::web::routes::add_comment_handler);
    cfg.service(crate::posts::adapter::incoming::web::routes::get_comments_handler);
    cfg.service(crate::posts::adapter::incoming::web::routes::toggle_like_handler);
    // Media
    cfg.service(crate::media::adapter::incoming::web::routes::upload_image_handler);
    // Jobs
    cfg.service(crate::jobs::adapter::incoming::web::routes::create_job_handler);
    cfg.service(crate::jobs::adapter::incoming::web::routes::get_jobs_handler);
    // Events
    cfg.service(crate::events::adapter::incoming::web::routes::create_event_handler);
    cfg.service(crate::events::adapter::incoming::web::routes::get_events_handler);
    cfg.service(crate::events::adapter::incoming::web::routes::delete_event_handler);
    // Donations
    cfg.service(crate::donations::adapter::incoming::web::routes::create_donation_handler);
    cfg.service(crate::donations::adapter::incoming::web::routes::get_donations_handler);
    cfg.service(crate::donations::adapter::incoming::web::routes::delete_donation_handler);
    // Stories
    cfg.service(crate::stories::adapter::incoming::web::routes::create_story_handler);
    cfg.service(crate::stories::adapter::incoming::web::routes::get_stories_handler);
    cfg.service(crate::stories::adapter::incoming::web::routes::delete_story_handler);
    // Profiles and the public alumni directory
    cfg.service(crate::profiles::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::profiles::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(crate::profiles::adapter::incoming::web::routes::get_all_profiles_handler);
    cfg.service(crate::profiles::adapter::incoming::web::routes::get_alumni_handler);
    // Stats
    cfg.service(crate::stats::adapter::incoming::web::routes::get_dashboard_stats_handler);
    // Admin
    cfg.service(crate::admin::adapter::incoming::web::routes::get_users_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::delete_user_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::get_admin_stats_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::get_pending_alumni_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::approve_alumni_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::reject_alumni_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::get_admin_jobs_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::verify_job_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::reject_job_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::get_admin_posts_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::moderate_post_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
