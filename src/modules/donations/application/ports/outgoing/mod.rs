pub mod donation_query;
pub mod donation_repository;
