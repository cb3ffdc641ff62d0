use std::sync::Arc;

use super::create_job::ICreateJobUseCase;
use super::get_jobs::IGetJobsUseCase;

/// Job board use cases wired into `AppState`. Review operations live in the
/// admin module.
#[derive(Clone)]
pub struct JobUseCases {
    pub create: Arc<dyn ICreateJobUseCase + Send + Sync>,
    pub get_list: Arc<dyn IGetJobsUseCase + Send + Sync>,
}
