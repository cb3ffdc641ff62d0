pub mod alumni_directory;
pub mod get_own_profile;
pub mod get_profiles;
pub mod profile_use_cases;
pub mod upsert_profile;

pub use profile_use_cases::ProfileUseCases;
