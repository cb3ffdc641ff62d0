pub mod create_job;
pub mod get_jobs;
pub mod job_use_cases;

pub use job_use_cases::JobUseCases;
