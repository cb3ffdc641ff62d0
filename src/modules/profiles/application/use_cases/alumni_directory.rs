use async_trait::async_trait;
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::user_query::UserQuery;
use crate::modules::profiles::application::ports::outgoing::profile_query::{
    ProfileQuery, ProfileQueryError,
};
use crate::modules::profiles::application::ports::outgoing::profile_repository::ProfileRecord;

//
// ──────────────────────────────────────────────────────────
// Read model
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct DirectoryUserView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// One directory card. Every verified alumnus gets an entry even before
/// they write a profile: text fields fall back to empty strings,
/// `graduation_year` to null, and `photo` is omitted when no profile row
/// exists yet.
#[derive(Debug, Clone, Serialize)]
pub struct AlumniDirectoryEntry {
    pub id: Uuid,
    pub user: DirectoryUserView,
    #[serde(rename = "currentPosition")]
    pub current_position: String,
    pub company: String,
    pub department: String,
    pub location: String,
    pub graduation_year: Option<i32>,
    pub bio: String,
    pub linkedin: String,
    pub github: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AlumniDirectoryError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait IAlumniDirectoryUseCase {
    async fn execute(&self) -> Result<Vec<AlumniDirectoryEntry>, AlumniDirectoryError>;
}

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct AlumniDirectoryService<U, Q>
where
    U: UserQuery,
    Q: ProfileQuery,
{
    user_query: U,
    profile_query: Q,
}

impl<U, Q> AlumniDirectoryService<U, Q>
where
    U: UserQuery,
    Q: ProfileQuery,
{
    pub fn new(user_query: U, profile_query: Q) -> Self {
        Self {
            user_query,
            profile_query,
        }
    }
}

#[async_trait]
impl<U, Q> IAlumniDirectoryUseCase for AlumniDirectoryService<U, Q>
where
    U: UserQuery + Send + Sync,
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<AlumniDirectoryEntry>, AlumniDirectoryError> {
        let alumni = self
            .user_query
            .list_alumni()
            .await
            .map_err(|e| AlumniDirectoryError::QueryFailed(e.to_string()))?;

        let ids: Vec<Uuid> = alumni.iter().map(|u| u.id).collect();
        let profiles = self
            .profile_query
            .list_by_user_ids(&ids)
            .await
            .map_err(|ProfileQueryError::DatabaseError(msg)| {
                AlumniDirectoryError::QueryFailed(msg)
            })?;

        let mut by_user: HashMap<Uuid, ProfileRecord> =
            profiles.into_iter().map(|p| (p.user_id, p)).collect();

        Ok(alumni
            .into_iter()
            .map(|user| {
                let profile = by_user.remove(&user.id);
                directory_entry(user, profile)
            })
            .collect())
    }
}

fn directory_entry(user: User, profile: Option<ProfileRecord>) -> AlumniDirectoryEntry {
    let card = DirectoryUserView {
        id: user.id,
        name: user.name,
        email: user.email,
    };

    match profile {
        Some(p) => AlumniDirectoryEntry {
            id: user.id,
            user: card,
            current_position: p.current_position.unwrap_or_default(),
            company: p.company.unwrap_or_default(),
            department: p.department.unwrap_or_default(),
            location: p.location.unwrap_or_default(),
            graduation_year: p.graduation_year,
            bio: p.bio.unwrap_or_default(),
            linkedin: p.linkedin.unwrap_or_default(),
            github: p.github.unwrap_or_default(),
            photo: Some(p.photo),
        },
        None => AlumniDirectoryEntry {
            id: user.id,
            user: card,
            current_position: String::new(),
            company: String::new(),
            department: String::new(),
            location: String::new(),
            graduation_year: None,
            bio: String::new(),
            linkedin: String::new(),
            github: String::new(),
            photo: None,
        },
    }
}
