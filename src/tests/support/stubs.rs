use async_trait::async_trait;
use uuid::Uuid;

use crate::admin::application::use_cases::admin_stats::{
    AdminStats, AdminStatsError, IAdminStatsUseCase,
};
use crate::admin::application::use_cases::approve_alumni::{
    ApproveAlumniError, IApproveAlumniUseCase,
};
use crate::admin::application::use_cases::delete_user::{DeleteUserError, IDeleteUserUseCase};
use crate::admin::application::use_cases::list_jobs::{IListJobsUseCase, ListJobsError};
use crate::admin::application::use_cases::list_pending_alumni::{
    IListPendingAlumniUseCase, ListPendingAlumniError,
};
use crate::admin::application::use_cases::list_users::{IListUsersUseCase, ListUsersError};
use crate::admin::application::use_cases::moderate_post::{IModeratePostUseCase, ModeratePostError};
use crate::admin::application::use_cases::reject_alumni::{IRejectAlumniUseCase, RejectAlumniError};
use crate::admin::application::use_cases::reject_job::{IRejectJobUseCase, RejectJobError};
use crate::admin::application::use_cases::verify_job::{IVerifyJobUseCase, VerifyJobError};
use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};
use crate::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterError, RegisterRequest, RegisterUserResponse,
};
use crate::auth::application::use_cases::user_view::UserView;
use crate::donations::application::ports::outgoing::donation_repository::DonationRecord;
use crate::donations::application::use_cases::create_donation::{
    CreateDonationError, CreateDonationInput, ICreateDonationUseCase,
};
use crate::donations::application::use_cases::delete_donation::{
    DeleteDonationError, IDeleteDonationUseCase,
};
use crate::donations::application::use_cases::get_donations::{
    GetDonationsError, IGetDonationsUseCase,
};
use crate::events::application::ports::outgoing::event_repository::EventRecord;
use crate::events::application::use_cases::create_event::{
    CreateEventError, CreateEventInput, ICreateEventUseCase,
};
use crate::events::application::use_cases::delete_event::{DeleteEventError, IDeleteEventUseCase};
use crate::events::application::use_cases::get_events::{GetEventsError, IGetEventsUseCase};
use crate::jobs::application::ports::outgoing::job_query::JobWithPosterView;
use crate::jobs::application::ports::outgoing::job_repository::JobRecord;
use crate::jobs::application::use_cases::create_job::{
    CreateJobError, CreateJobInput, ICreateJobUseCase,
};
use crate::jobs::application::use_cases::get_jobs::{GetJobsError, IGetJobsUseCase};
use crate::media::application::use_cases::upload_image::{IUploadImageUseCase, UploadImageError};
use crate::posts::application::ports::outgoing::post_query::{CommentView, PostView};
use crate::posts::application::ports::outgoing::post_repository::{PostRecord, UpdatePostData};
use crate::posts::application::use_cases::comment_on_post::{
    CommentOnPostError, ICommentOnPostUseCase,
};
use crate::posts::application::use_cases::create_post::{
    CreatePostError, CreatePostInput, ICreatePostUseCase,
};
use crate::posts::application::use_cases::delete_post::{DeletePostError, IDeletePostUseCase};
use crate::posts::application::use_cases::get_comments::{GetCommentsError, IGetCommentsUseCase};
use crate::posts::application::use_cases::get_post::{GetPostError, IGetPostUseCase};
use crate::posts::application::use_cases::get_posts::{GetPostsError, IGetPostsUseCase};
use crate::posts::application::use_cases::toggle_like::{IToggleLikeUseCase, ToggleLikeError};
use crate::posts::application::use_cases::update_post::{IUpdatePostUseCase, UpdatePostError};
use crate::profiles::application::ports::outgoing::profile_query::ProfileWithUserView;
use crate::profiles::application::ports::outgoing::profile_repository::ProfileRecord;
use crate::profiles::application::use_cases::alumni_directory::{
    AlumniDirectoryEntry, AlumniDirectoryError, IAlumniDirectoryUseCase,
};
use crate::profiles::application::use_cases::get_own_profile::{
    GetOwnProfileError, IGetOwnProfileUseCase, OwnProfileView,
};
use crate::profiles::application::use_cases::get_profiles::{GetProfilesError, IGetProfilesUseCase};
use crate::profiles::application::use_cases::upsert_profile::{
    IUpsertProfileUseCase, UpsertProfileError, UpsertProfileInput,
};
use crate::stats::application::use_cases::dashboard_stats::{
    DashboardStats, DashboardStatsError, IDashboardStatsUseCase,
};
use crate::stories::application::ports::outgoing::story_query::StoryWithAuthorView;
use crate::stories::application::ports::outgoing::story_repository::StoryRecord;
use crate::stories::application::use_cases::create_story::{
    CreateStoryError, CreateStoryInput, ICreateStoryUseCase,
};
use crate::stories::application::use_cases::delete_story::{DeleteStoryError, IDeleteStoryUseCase};
use crate::stories::application::use_cases::get_stories::{GetStoriesError, IGetStoriesUseCase};

// ============================================================================
// Extractor collaborators
// ============================================================================

/// Token provider for builder defaults. Tests that exercise a protected
/// route swap in a real `JwtTokenService` via `with_token_provider`.
#[derive(Default, Clone)]
pub struct StubTokenProvider;

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, _user_id: Uuid) -> Result<String, TokenError> {
        unimplemented!("Not used in this test")
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        unimplemented!("Not used in this test")
    }
}

/// User lookup for builder defaults. Panics when reached so a test that
/// forgot `with_user_query` fails loudly instead of drifting into a 401.
#[derive(Default, Clone)]
pub struct DummyUserQuery;

#[async_trait]
impl UserQuery for DummyUserQuery {
    async fn find_by_id(&self, _user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        unimplemented!("Not used in this test")
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserQueryError> {
        unimplemented!("Not used in this test")
    }

    async fn list_all(&self) -> Result<Vec<User>, UserQueryError> {
        unimplemented!("Not used in this test")
    }

    async fn list_pending_alumni(&self) -> Result<Vec<User>, UserQueryError> {
        unimplemented!("Not used in this test")
    }

    async fn list_alumni(&self) -> Result<Vec<User>, UserQueryError> {
        unimplemented!("Not used in this test")
    }

    async fn count_users(&self) -> Result<u64, UserQueryError> {
        unimplemented!("Not used in this test")
    }

    async fn count_alumni(&self) -> Result<u64, UserQueryError> {
        unimplemented!("Not used in this test")
    }
}

/// Configurable user lookup backing the auth extractors in route tests.
#[derive(Default, Clone)]
pub struct StubUserQuery {
    user: Option<User>,
    error: Option<String>,
}

impl StubUserQuery {
    pub fn with_user(user: User) -> Self {
        Self {
            user: Some(user),
            error: None,
        }
    }

    pub fn not_found() -> Self {
        Self::default()
    }

    pub fn db_error(msg: &str) -> Self {
        Self {
            user: None,
            error: Some(msg.to_string()),
        }
    }

    fn lookup(&self) -> Result<Option<User>, UserQueryError> {
        if let Some(msg) = &self.error {
            return Err(UserQueryError::DatabaseError(msg.clone()));
        }
        Ok(self.user.clone())
    }
}

#[async_trait]
impl UserQuery for StubUserQuery {
    async fn find_by_id(&self, _user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        self.lookup()
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserQueryError> {
        self.lookup()
    }

    async fn list_all(&self) -> Result<Vec<User>, UserQueryError> {
        unimplemented!("Not used in this test")
    }

    async fn list_pending_alumni(&self) -> Result<Vec<User>, UserQueryError> {
        unimplemented!("Not used in this test")
    }

    async fn list_alumni(&self) -> Result<Vec<User>, UserQueryError> {
        unimplemented!("Not used in this test")
    }

    async fn count_users(&self) -> Result<u64, UserQueryError> {
        unimplemented!("Not used in this test")
    }

    async fn count_alumni(&self) -> Result<u64, UserQueryError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Auth
// ============================================================================

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        _request: RegisterRequest,
    ) -> Result<RegisterUserResponse, RegisterError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Posts
// ============================================================================

#[derive(Default, Clone)]
pub struct StubCreatePostUseCase;

#[async_trait]
impl ICreatePostUseCase for StubCreatePostUseCase {
    async fn execute(
        &self,
        _author_id: Uuid,
        _input: CreatePostInput,
    ) -> Result<PostRecord, CreatePostError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetPostsUseCase;

#[async_trait]
impl IGetPostsUseCase for StubGetPostsUseCase {
    async fn execute(&self) -> Result<Vec<PostView>, GetPostsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetPostUseCase;

#[async_trait]
impl IGetPostUseCase for StubGetPostUseCase {
    async fn execute(&self, _post_id: Uuid) -> Result<PostView, GetPostError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdatePostUseCase;

#[async_trait]
impl IUpdatePostUseCase for StubUpdatePostUseCase {
    async fn execute(
        &self,
        _actor: User,
        _post_id: Uuid,
        _data: UpdatePostData,
    ) -> Result<PostRecord, UpdatePostError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeletePostUseCase;

#[async_trait]
impl IDeletePostUseCase for StubDeletePostUseCase {
    async fn execute(&self, _actor: User, _post_id: Uuid) -> Result<(), DeletePostError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCommentOnPostUseCase;

#[async_trait]
impl ICommentOnPostUseCase for StubCommentOnPostUseCase {
    async fn execute(
        &self,
        _author_id: Uuid,
        _post_id: Uuid,
        _text: String,
    ) -> Result<Vec<CommentView>, CommentOnPostError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetCommentsUseCase;

#[async_trait]
impl IGetCommentsUseCase for StubGetCommentsUseCase {
    async fn execute(&self, _post_id: Uuid) -> Result<Vec<CommentView>, GetCommentsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubToggleLikeUseCase;

#[async_trait]
impl IToggleLikeUseCase for StubToggleLikeUseCase {
    async fn execute(&self, _user_id: Uuid, _post_id: Uuid) -> Result<u64, ToggleLikeError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Media
// ============================================================================

#[derive(Default, Clone)]
pub struct StubUploadImageUseCase;

#[async_trait]
impl IUploadImageUseCase for StubUploadImageUseCase {
    async fn execute(&self, _bytes: Vec<u8>) -> Result<String, UploadImageError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Jobs
// ============================================================================

#[derive(Default, Clone)]
pub struct StubCreateJobUseCase;

#[async_trait]
impl ICreateJobUseCase for StubCreateJobUseCase {
    async fn execute(
        &self,
        _actor: User,
        _input: CreateJobInput,
    ) -> Result<JobRecord, CreateJobError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetJobsUseCase;

#[async_trait]
impl IGetJobsUseCase for StubGetJobsUseCase {
    async fn execute(&self) -> Result<Vec<JobRecord>, GetJobsError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Events
// ============================================================================

#[derive(Default, Clone)]
pub struct StubCreateEventUseCase;

#[async_trait]
impl ICreateEventUseCase for StubCreateEventUseCase {
    async fn execute(
        &self,
        _actor: User,
        _input: CreateEventInput,
    ) -> Result<EventRecord, CreateEventError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetEventsUseCase;

#[async_trait]
impl IGetEventsUseCase for StubGetEventsUseCase {
    async fn execute(&self) -> Result<Vec<EventRecord>, GetEventsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteEventUseCase;

#[async_trait]
impl IDeleteEventUseCase for StubDeleteEventUseCase {
    async fn execute(&self, _actor: User, _event_id: Uuid) -> Result<(), DeleteEventError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Donations
// ============================================================================

#[derive(Default, Clone)]
pub struct StubCreateDonationUseCase;

#[async_trait]
impl ICreateDonationUseCase for StubCreateDonationUseCase {
    async fn execute(
        &self,
        _actor: User,
        _input: CreateDonationInput,
    ) -> Result<DonationRecord, CreateDonationError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetDonationsUseCase;

#[async_trait]
impl IGetDonationsUseCase for StubGetDonationsUseCase {
    async fn execute(&self) -> Result<Vec<DonationRecord>, GetDonationsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteDonationUseCase;

#[async_trait]
impl IDeleteDonationUseCase for StubDeleteDonationUseCase {
    async fn execute(&self, _actor: User, _donation_id: Uuid) -> Result<(), DeleteDonationError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Stories
// ============================================================================

#[derive(Default, Clone)]
pub struct StubCreateStoryUseCase;

#[async_trait]
impl ICreateStoryUseCase for StubCreateStoryUseCase {
    async fn execute(
        &self,
        _actor: User,
        _input: CreateStoryInput,
    ) -> Result<StoryRecord, CreateStoryError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetStoriesUseCase;

#[async_trait]
impl IGetStoriesUseCase for StubGetStoriesUseCase {
    async fn execute(&self) -> Result<Vec<StoryWithAuthorView>, GetStoriesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteStoryUseCase;

#[async_trait]
impl IDeleteStoryUseCase for StubDeleteStoryUseCase {
    async fn execute(&self, _actor: User, _story_id: Uuid) -> Result<(), DeleteStoryError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Profiles
// ============================================================================

#[derive(Default, Clone)]
pub struct StubGetOwnProfileUseCase;

#[async_trait]
impl IGetOwnProfileUseCase for StubGetOwnProfileUseCase {
    async fn execute(&self, _user: User) -> Result<OwnProfileView, GetOwnProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpsertProfileUseCase;

#[async_trait]
impl IUpsertProfileUseCase for StubUpsertProfileUseCase {
    async fn execute(
        &self,
        _user: User,
        _input: UpsertProfileInput,
    ) -> Result<ProfileRecord, UpsertProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetProfilesUseCase;

#[async_trait]
impl IGetProfilesUseCase for StubGetProfilesUseCase {
    async fn execute(&self) -> Result<Vec<ProfileWithUserView>, GetProfilesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubAlumniDirectoryUseCase;

#[async_trait]
impl IAlumniDirectoryUseCase for StubAlumniDirectoryUseCase {
    async fn execute(&self) -> Result<Vec<AlumniDirectoryEntry>, AlumniDirectoryError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Admin
// ============================================================================

#[derive(Default, Clone)]
pub struct StubListUsersUseCase;

#[async_trait]
impl IListUsersUseCase for StubListUsersUseCase {
    async fn execute(&self, _actor: User) -> Result<Vec<UserView>, ListUsersError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteUserUseCase;

#[async_trait]
impl IDeleteUserUseCase for StubDeleteUserUseCase {
    async fn execute(&self, _actor: User, _user_id: Uuid) -> Result<(), DeleteUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubAdminStatsUseCase;

#[async_trait]
impl IAdminStatsUseCase for StubAdminStatsUseCase {
    async fn execute(&self, _actor: User) -> Result<AdminStats, AdminStatsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListPendingAlumniUseCase;

#[async_trait]
impl IListPendingAlumniUseCase for StubListPendingAlumniUseCase {
    async fn execute(&self, _actor: User) -> Result<Vec<UserView>, ListPendingAlumniError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubApproveAlumniUseCase;

#[async_trait]
impl IApproveAlumniUseCase for StubApproveAlumniUseCase {
    async fn execute(&self, _actor: User, _user_id: Uuid) -> Result<User, ApproveAlumniError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRejectAlumniUseCase;

#[async_trait]
impl IRejectAlumniUseCase for StubRejectAlumniUseCase {
    async fn execute(&self, _actor: User, _user_id: Uuid) -> Result<User, RejectAlumniError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListJobsUseCase;

#[async_trait]
impl IListJobsUseCase for StubListJobsUseCase {
    async fn execute(&self, _actor: User) -> Result<Vec<JobWithPosterView>, ListJobsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubVerifyJobUseCase;

#[async_trait]
impl IVerifyJobUseCase for StubVerifyJobUseCase {
    async fn execute(&self, _actor: User, _job_id: Uuid) -> Result<JobRecord, VerifyJobError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRejectJobUseCase;

#[async_trait]
impl IRejectJobUseCase for StubRejectJobUseCase {
    async fn execute(&self, _actor: User, _job_id: Uuid) -> Result<(), RejectJobError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubModeratePostUseCase;

#[async_trait]
impl IModeratePostUseCase for StubModeratePostUseCase {
    async fn execute(&self, _actor: User, _post_id: Uuid) -> Result<(), ModeratePostError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Stats
// ============================================================================

#[derive(Default, Clone)]
pub struct StubDashboardStatsUseCase;

#[async_trait]
impl IDashboardStatsUseCase for StubDashboardStatsUseCase {
    async fn execute(&self) -> Result<DashboardStats, DashboardStatsError> {
        unimplemented!("Not used in this test")
    }
}
