mod create_job;
mod get_jobs;

pub use create_job::create_job_handler;
pub use get_jobs::get_jobs_handler;
