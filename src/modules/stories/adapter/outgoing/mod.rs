pub mod sea_orm_entity;
pub mod story_query_postgres;
pub mod story_repository_postgres;
