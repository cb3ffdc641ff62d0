use crate::modules::auth::application::domain::entities::User;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Email already registered")]
    EmailTaken,

    #[error("Scholar number already registered")]
    ScholarNoTaken,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository {
    /// Single atomic insert; evidence columns are written in the same
    /// statement when the user registers as a pending alumnus.
    async fn create_user(&self, user: User) -> Result<User, UserRepositoryError>;

    /// Conditional update gated on `pending_alumni = true`. A row that was
    /// already settled (approved, rejected, or never pending) counts as
    /// `UserNotFound` and is left untouched. Returns the updated user.
    async fn approve_pending_alumni(&self, user_id: Uuid) -> Result<User, UserRepositoryError>;

    /// Same gate as approval; clears the evidence fields and keeps the
    /// student role. Returns the updated user.
    async fn reject_pending_alumni(&self, user_id: Uuid) -> Result<User, UserRepositoryError>;

    async fn update_name(&self, user_id: Uuid, name: &str) -> Result<(), UserRepositoryError>;

    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;
}
