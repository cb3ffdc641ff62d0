pub mod story_query;
pub mod story_repository;
