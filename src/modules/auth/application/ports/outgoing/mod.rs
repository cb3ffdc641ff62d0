pub mod password_hasher;
pub mod token_provider;
pub mod user_query;
pub mod user_repository;

pub use user_query::{UserQuery, UserQueryError};
pub use user_repository::{UserRepository, UserRepositoryError};
