pub mod admin_stats;
pub mod admin_use_cases;
pub mod approve_alumni;
pub mod delete_user;
pub mod list_jobs;
pub mod list_pending_alumni;
pub mod list_users;
pub mod moderate_post;
pub mod reject_alumni;
pub mod reject_job;
pub mod verify_job;

pub use admin_use_cases::AdminUseCases;
