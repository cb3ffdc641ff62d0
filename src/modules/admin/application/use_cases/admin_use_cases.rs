use std::sync::Arc;

use super::admin_stats::IAdminStatsUseCase;
use super::approve_alumni::IApproveAlumniUseCase;
use super::delete_user::IDeleteUserUseCase;
use super::list_jobs::IListJobsUseCase;
use super::list_pending_alumni::IListPendingAlumniUseCase;
use super::list_users::IListUsersUseCase;
use super::moderate_post::IModeratePostUseCase;
use super::reject_alumni::IRejectAlumniUseCase;
use super::reject_job::IRejectJobUseCase;
use super::verify_job::IVerifyJobUseCase;

#[derive(Clone)]
pub struct AdminUseCases {
    pub list_users: Arc<dyn IListUsersUseCase + Send + Sync>,
    pub delete_user: Arc<dyn IDeleteUserUseCase + Send + Sync>,
    pub stats: Arc<dyn IAdminStatsUseCase + Send + Sync>,
    pub list_pending: Arc<dyn IListPendingAlumniUseCase + Send + Sync>,
    pub approve_alumni: Arc<dyn IApproveAlumniUseCase + Send + Sync>,
    pub reject_alumni: Arc<dyn IRejectAlumniUseCase + Send + Sync>,
    pub list_jobs: Arc<dyn IListJobsUseCase + Send + Sync>,
    pub verify_job: Arc<dyn IVerifyJobUseCase + Send + Sync>,
    pub reject_job: Arc<dyn IRejectJobUseCase + Send + Sync>,
    pub moderate_post: Arc<dyn IModeratePostUseCase + Send + Sync>,
}
