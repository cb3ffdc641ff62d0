pub mod post_query;
pub mod post_repository;
