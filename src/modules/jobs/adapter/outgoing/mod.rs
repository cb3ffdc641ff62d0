pub mod job_query_postgres;
pub mod job_repository_postgres;
pub mod sea_orm_entity;
