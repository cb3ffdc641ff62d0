pub mod job_query;
pub mod job_repository;
