use std::sync::Arc;

use actix_web::web;

use crate::admin::application::use_cases::admin_stats::IAdminStatsUseCase;
use crate::admin::application::use_cases::approve_alumni::IApproveAlumniUseCase;
use crate::admin::application::use_cases::delete_user::IDeleteUserUseCase;
use crate::admin::application::use_cases::list_jobs::IListJobsUseCase;
use crate::admin::application::use_cases::list_pending_alumni::IListPendingAlumniUseCase;
use crate::admin::application::use_cases::list_users::IListUsersUseCase;
use crate::admin::application::use_cases::moderate_post::IModeratePostUseCase;
use crate::admin::application::use_cases::reject_alumni::IRejectAlumniUseCase;
use crate::admin::application::use_cases::reject_job::IRejectJobUseCase;
use crate::admin::application::use_cases::verify_job::IVerifyJobUseCase;
use crate::admin::application::use_cases::AdminUseCases;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::ports::outgoing::user_query::UserQuery;
use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::auth::application::use_cases::register_user::IRegisterUserUseCase;
use crate::auth::application::use_cases::AuthUseCases;
use crate::donations::application::use_cases::create_donation::ICreateDonationUseCase;
use crate::donations::application::use_cases::delete_donation::IDeleteDonationUseCase;
use crate::donations::application::use_cases::get_donations::IGetDonationsUseCase;
use crate::donations::application::use_cases::DonationUseCases;
use crate::events::application::use_cases::create_event::ICreateEventUseCase;
use crate::events::application::use_cases::delete_event::IDeleteEventUseCase;
use crate::events::application::use_cases::get_events::IGetEventsUseCase;
use crate::events::application::use_cases::EventUseCases;
use crate::jobs::application::use_cases::create_job::ICreateJobUseCase;
use crate::jobs::application::use_cases::get_jobs::IGetJobsUseCase;
use crate::jobs::application::use_cases::JobUseCases;
use crate::media::application::use_cases::upload_image::IUploadImageUseCase;
use crate::media::application::use_cases::MediaUseCases;
use crate::posts::application::use_cases::comment_on_post::ICommentOnPostUseCase;
use crate::posts::application::use_cases::create_post::ICreatePostUseCase;
use crate::posts::application::use_cases::delete_post::IDeletePostUseCase;
use crate::posts::application::use_cases::get_comments::IGetCommentsUseCase;
use crate::posts::application::use_cases::get_post::IGetPostUseCase;
use crate::posts::application::use_cases::get_posts::IGetPostsUseCase;
use crate::posts::application::use_cases::toggle_like::IToggleLikeUseCase;
use crate::posts::application::use_cases::update_post::IUpdatePostUseCase;
use crate::posts::application::use_cases::PostUseCases;
use crate::profiles::application::use_cases::alumni_directory::IAlumniDirectoryUseCase;
use crate::profiles::application::use_cases::get_own_profile::IGetOwnProfileUseCase;
use crate::profiles::application::use_cases::get_profiles::IGetProfilesUseCase;
use crate::profiles::application::use_cases::upsert_profile::IUpsertProfileUseCase;
use crate::profiles::application::use_cases::ProfileUseCases;
use crate::stats::application::use_cases::dashboard_stats::IDashboardStatsUseCase;
use crate::stats::application::use_cases::StatsUseCases;
use crate::stories::application::use_cases::create_story::ICreateStoryUseCase;
use crate::stories::application::use_cases::delete_story::IDeleteStoryUseCase;
use crate::stories::application::use_cases::get_stories::IGetStoriesUseCase;
use crate::stories::application::use_cases::StoryUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where every slot defaults to a panicking stub, so a
/// route test only swaps in the collaborators it actually exercises.
pub struct TestAppStateBuilder {
    token_provider: Option<Arc<dyn TokenProvider + Send + Sync>>,
    user_query: Option<Arc<dyn UserQuery + Send + Sync>>,
    auth: Option<AuthUseCases>,
    posts: Option<PostUseCases>,
    media: Option<MediaUseCases>,
    jobs: Option<JobUseCases>,
    events: Option<EventUseCases>,
    donations: Option<DonationUseCases>,
    stories: Option<StoryUseCases>,
    profiles: Option<ProfileUseCases>,
    admin: Option<AdminUseCases>,
    stats: Option<StatsUseCases>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            token_provider: Some(Arc::new(StubTokenProvider)),
            user_query: Some(Arc::new(DummyUserQuery)),
            auth: Some(AuthUseCases {
                register: Arc::new(StubRegisterUserUseCase),
                login: Arc::new(StubLoginUserUseCase),
            }),
            posts: Some(PostUseCases {
                create: Arc::new(StubCreatePostUseCase),
                get_list: Arc::new(StubGetPostsUseCase),
                get_single: Arc::new(StubGetPostUseCase),
                update: Arc::new(StubUpdatePostUseCase),
                delete: Arc::new(StubDeletePostUseCase),
                comment: Arc::new(StubCommentOnPostUseCase),
                get_comments: Arc::new(StubGetCommentsUseCase),
                toggle_like: Arc::new(StubToggleLikeUseCase),
            }),
            media: Some(MediaUseCases {
                upload: Arc::new(StubUploadImageUseCase),
            }),
            jobs: Some(JobUseCases {
                create: Arc::new(StubCreateJobUseCase),
                get_list: Arc::new(StubGetJobsUseCase),
            }),
            events: Some(EventUseCases {
                create: Arc::new(StubCreateEventUseCase),
                get_list: Arc::new(StubGetEventsUseCase),
                delete: Arc::new(StubDeleteEventUseCase),
            }),
            donations: Some(DonationUseCases {
                create: Arc::new(StubCreateDonationUseCase),
                get_list: Arc::new(StubGetDonationsUseCase),
                delete: Arc::new(StubDeleteDonationUseCase),
            }),
            stories: Some(StoryUseCases {
                create: Arc::new(StubCreateStoryUseCase),
                get_list: Arc::new(StubGetStoriesUseCase),
                delete: Arc::new(StubDeleteStoryUseCase),
            }),
            profiles: Some(ProfileUseCases {
                get_own: Arc::new(StubGetOwnProfileUseCase),
                upsert: Arc::new(StubUpsertProfileUseCase),
                get_list: Arc::new(StubGetProfilesUseCase),
                directory: Arc::new(StubAlumniDirectoryUseCase),
            }),
            admin: Some(AdminUseCases {
                list_users: Arc::new(StubListUsersUseCase),
                delete_user: Arc::new(StubDeleteUserUseCase),
                stats: Arc::new(StubAdminStatsUseCase),
                list_pending: Arc::new(StubListPendingAlumniUseCase),
                approve_alumni: Arc::new(StubApproveAlumniUseCase),
                reject_alumni: Arc::new(StubRejectAlumniUseCase),
                list_jobs: Arc::new(StubListJobsUseCase),
                verify_job: Arc::new(StubVerifyJobUseCase),
                reject_job: Arc::new(StubRejectJobUseCase),
                moderate_post: Arc::new(StubModeratePostUseCase),
            }),
            stats: Some(StatsUseCases {
                dashboard: Arc::new(StubDashboardStatsUseCase),
            }),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_token_provider(
        mut self,
        provider: impl TokenProvider + Send + Sync + 'static,
    ) -> Self {
        self.token_provider = Some(Arc::new(provider));
        self
    }

    pub fn with_user_query(mut self, query: impl UserQuery + Send + Sync + 'static) -> Self {
        self.user_query = Some(Arc::new(query));
        self
    }

    pub fn with_register_user(
        mut self,
        uc: impl IRegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        let auth = self.auth.as_mut().expect("Auth use cases must be initialized");
        auth.register = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        let auth = self.auth.as_mut().expect("Auth use cases must be initialized");
        auth.login = Arc::new(uc);
        self
    }

    pub fn with_create_post(mut self, uc: impl ICreatePostUseCase + Send + Sync + 'static) -> Self {
        let posts = self.posts.as_mut().expect("Post use cases must be initialized");
        posts.create = Arc::new(uc);
        self
    }

    pub fn with_get_posts(mut self, uc: impl IGetPostsUseCase + Send + Sync + 'static) -> Self {
        let posts = self.posts.as_mut().expect("Post use cases must be initialized");
        posts.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_post(mut self, uc: impl IGetPostUseCase + Send + Sync + 'static) -> Self {
        let posts = self.posts.as_mut().expect("Post use cases must be initialized");
        posts.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_post(mut self, uc: impl IUpdatePostUseCase + Send + Sync + 'static) -> Self {
        let posts = self.posts.as_mut().expect("Post use cases must be initialized");
        posts.update = Arc::new(uc);
        self
    }

    pub fn with_delete_post(mut self, uc: impl IDeletePostUseCase + Send + Sync + 'static) -> Self {
        let posts = self.posts.as_mut().expect("Post use cases must be initialized");
        posts.delete = Arc::new(uc);
        self
    }

    pub fn with_comment_on_post(
        mut self,
        uc: impl ICommentOnPostUseCase + Send + Sync + 'static,
    ) -> Self {
        let posts = self.posts.as_mut().expect("Post use cases must be initialized");
        posts.comment = Arc::new(uc);
        self
    }

    pub fn with_get_comments(
        mut self,
        uc: impl IGetCommentsUseCase + Send + Sync + 'static,
    ) -> Self {
        let posts = self.posts.as_mut().expect("Post use cases must be initialized");
        posts.get_comments = Arc::new(uc);
        self
    }

    pub fn with_toggle_like(mut self, uc: impl IToggleLikeUseCase + Send + Sync + 'static) -> Self {
        let posts = self.posts.as_mut().expect("Post use cases must be initialized");
        posts.toggle_like = Arc::new(uc);
        self
    }

    pub fn with_upload_image(
        mut self,
        uc: impl IUploadImageUseCase + Send + Sync + 'static,
    ) -> Self {
        let media = self.media.as_mut().expect("Media use cases must be initialized");
        media.upload = Arc::new(uc);
        self
    }

    pub fn with_create_job(mut self, uc: impl ICreateJobUseCase + Send + Sync + 'static) -> Self {
        let jobs = self.jobs.as_mut().expect("Job use cases must be initialized");
        jobs.create = Arc::new(uc);
        self
    }

    pub fn with_get_jobs(mut self, uc: impl IGetJobsUseCase + Send + Sync + 'static) -> Self {
        let jobs = self.jobs.as_mut().expect("Job use cases must be initialized");
        jobs.get_list = Arc::new(uc);
        self
    }

    pub fn with_create_event(
        mut self,
        uc: impl ICreateEventUseCase + Send + Sync + 'static,
    ) -> Self {
        let events = self.events.as_mut().expect("Event use cases must be initialized");
        events.create = Arc::new(uc);
        self
    }

    pub fn with_get_events(mut self, uc: impl IGetEventsUseCase + Send + Sync + 'static) -> Self {
        let events = self.events.as_mut().expect("Event use cases must be initialized");
        events.get_list = Arc::new(uc);
        self
    }

    pub fn with_delete_event(
        mut self,
        uc: impl IDeleteEventUseCase + Send + Sync + 'static,
    ) -> Self {
        let events = self.events.as_mut().expect("Event use cases must be initialized");
        events.delete = Arc::new(uc);
        self
    }

    pub fn with_create_donation(
        mut self,
        uc: impl ICreateDonationUseCase + Send + Sync + 'static,
    ) -> Self {
        let donations = self
            .donations
            .as_mut()
            .expect("Donation use cases must be initialized");
        donations.create = Arc::new(uc);
        self
    }

    pub fn with_get_donations(
        mut self,
        uc: impl IGetDonationsUseCase + Send + Sync + 'static,
    ) -> Self {
        let donations = self
            .donations
            .as_mut()
            .expect("Donation use cases must be initialized");
        donations.get_list = Arc::new(uc);
        self
    }

    pub fn with_delete_donation(
        mut self,
        uc: impl IDeleteDonationUseCase + Send + Sync + 'static,
    ) -> Self {
        let donations = self
            .donations
            .as_mut()
            .expect("Donation use cases must be initialized");
        donations.delete = Arc::new(uc);
        self
    }

    pub fn with_create_story(
        mut self,
        uc: impl ICreateStoryUseCase + Send + Sync + 'static,
    ) -> Self {
        let stories = self.stories.as_mut().expect("Story use cases must be initialized");
        stories.create = Arc::new(uc);
        self
    }

    pub fn with_get_stories(mut self, uc: impl IGetStoriesUseCase + Send + Sync + 'static) -> Self {
        let stories = self.stories.as_mut().expect("Story use cases must be initialized");
        stories.get_list = Arc::new(uc);
        self
    }

    pub fn with_delete_story(
        mut self,
        uc: impl IDeleteStoryUseCase + Send + Sync + 'static,
    ) -> Self {
        let stories = self.stories.as_mut().expect("Story use cases must be initialized");
        stories.delete = Arc::new(uc);
        self
    }

    pub fn with_get_own_profile(
        mut self,
        uc: impl IGetOwnProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        let profiles = self
            .profiles
            .as_mut()
            .expect("Profile use cases must be initialized");
        profiles.get_own = Arc::new(uc);
        self
    }

    pub fn with_upsert_profile(
        mut self,
        uc: impl IUpsertProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        let profiles = self
            .profiles
            .as_mut()
            .expect("Profile use cases must be initialized");
        profiles.upsert = Arc::new(uc);
        self
    }

    pub fn with_get_profiles(
        mut self,
        uc: impl IGetProfilesUseCase + Send + Sync + 'static,
    ) -> Self {
        let profiles = self
            .profiles
            .as_mut()
            .expect("Profile use cases must be initialized");
        profiles.get_list = Arc::new(uc);
        self
    }

    pub fn with_alumni_directory(
        mut self,
        uc: impl IAlumniDirectoryUseCase + Send + Sync + 'static,
    ) -> Self {
        let profiles = self
            .profiles
            .as_mut()
            .expect("Profile use cases must be initialized");
        profiles.directory = Arc::new(uc);
        self
    }

    pub fn with_list_users(mut self, uc: impl IListUsersUseCase + Send + Sync + 'static) -> Self {
        let admin = self.admin.as_mut().expect("Admin use cases must be initialized");
        admin.list_users = Arc::new(uc);
        self
    }

    pub fn with_delete_user(mut self, uc: impl IDeleteUserUseCase + Send + Sync + 'static) -> Self {
        let admin = self.admin.as_mut().expect("Admin use cases must be initialized");
        admin.delete_user = Arc::new(uc);
        self
    }

    pub fn with_admin_stats(mut self, uc: impl IAdminStatsUseCase + Send + Sync + 'static) -> Self {
        let admin = self.admin.as_mut().expect("Admin use cases must be initialized");
        admin.stats = Arc::new(uc);
        self
    }

    pub fn with_list_pending(
        mut self,
        uc: impl IListPendingAlumniUseCase + Send + Sync + 'static,
    ) -> Self {
        let admin = self.admin.as_mut().expect("Admin use cases must be initialized");
        admin.list_pending = Arc::new(uc);
        self
    }

    pub fn with_approve_alumni(
        mut self,
        uc: impl IApproveAlumniUseCase + Send + Sync + 'static,
    ) -> Self {
        let admin = self.admin.as_mut().expect("Admin use cases must be initialized");
        admin.approve_alumni = Arc::new(uc);
        self
    }

    pub fn with_reject_alumni(
        mut self,
        uc: impl IRejectAlumniUseCase + Send + Sync + 'static,
    ) -> Self {
        let admin = self.admin.as_mut().expect("Admin use cases must be initialized");
        admin.reject_alumni = Arc::new(uc);
        self
    }

    pub fn with_list_jobs(mut self, uc: impl IListJobsUseCase + Send + Sync + 'static) -> Self {
        let admin = self.admin.as_mut().expect("Admin use cases must be initialized");
        admin.list_jobs = Arc::new(uc);
        self
    }

    pub fn with_verify_job(mut self, uc: impl IVerifyJobUseCase + Send + Sync + 'static) -> Self {
        let admin = self.admin.as_mut().expect("Admin use cases must be initialized");
        admin.verify_job = Arc::new(uc);
        self
    }

    pub fn with_reject_job(mut self, uc: impl IRejectJobUseCase + Send + Sync + 'static) -> Self {
        let admin = self.admin.as_mut().expect("Admin use cases must be initialized");
        admin.reject_job = Arc::new(uc);
        self
    }

    pub fn with_moderate_post(
        mut self,
        uc: impl IModeratePostUseCase + Send + Sync + 'static,
    ) -> Self {
        let admin = self.admin.as_mut().expect("Admin use cases must be initialized");
        admin.moderate_post = Arc::new(uc);
        self
    }

    pub fn with_dashboard_stats(
        mut self,
        uc: impl IDashboardStatsUseCase + Send + Sync + 'static,
    ) -> Self {
        let stats = self.stats.as_mut().expect("Stats use cases must be initialized");
        stats.dashboard = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            token_provider: self.token_provider.unwrap(),
            user_query: self.user_query.unwrap(),
            auth: self.auth.unwrap(),
            posts: self.posts.unwrap(),
            media: self.media.unwrap(),
            jobs: self.jobs.unwrap(),
            events: self.events.unwrap(),
            donations: self.donations.unwrap(),
            stories: self.stories.unwrap(),
            profiles: self.profiles.unwrap(),
            admin: self.admin.unwrap(),
            stats: self.stats.unwrap(),
        })
    }
}
