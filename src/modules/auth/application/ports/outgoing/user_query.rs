// application/ports/outgoing/user_query.rs
use crate::modules::auth::application::domain::entities::User;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// A stored row whose role/pending/evidence columns form no valid
    /// account state. Surfaced as a server fault, never as a user state.
    #[error("Corrupt user record: {0}")]
    CorruptRecord(String),
}

/// Read side of the credential store. Returns the full domain user because
/// every caller (login, extractors, admin listings) needs the account status
/// to run policy checks.
#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;
    async fn list_all(&self) -> Result<Vec<User>, UserQueryError>;
    async fn list_pending_alumni(&self) -> Result<Vec<User>, UserQueryError>;
    async fn list_alumni(&self) -> Result<Vec<User>, UserQueryError>;
    async fn count_users(&self) -> Result<u64, UserQueryError>;
    async fn count_alumni(&self) -> Result<u64, UserQueryError>;
}
