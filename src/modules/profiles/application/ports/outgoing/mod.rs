pub mod profile_query;
pub mod profile_repository;
