use std::sync::Arc;

use super::alumni_directory::IAlumniDirectoryUseCase;
use super::get_own_profile::IGetOwnProfileUseCase;
use super::get_profiles::IGetProfilesUseCase;
use super::upsert_profile::IUpsertProfileUseCase;

#[derive(Clone)]
pub struct ProfileUseCases {
    pub get_own: Arc<dyn IGetOwnProfileUseCase + Send + Sync>,
    pub upsert: Arc<dyn IUpsertProfileUseCase + Send + Sync>,
    pub get_list: Arc<dyn IGetProfilesUseCase + Send + Sync>,
    pub directory: Arc<dyn IAlumniDirectoryUseCase + Send + Sync>,
}
