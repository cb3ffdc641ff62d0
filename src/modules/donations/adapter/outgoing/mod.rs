pub mod donation_query_postgres;
pub mod donation_repository_postgres;
pub mod sea_orm_entity;
