use async_trait::async_trait;
use serde::Serialize;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::profiles::application::ports::outgoing::profile_query::{
    ProfileQuery, ProfileQueryError,
};
use crate::modules::profiles::application::ports::outgoing::profile_repository::DEFAULT_PHOTO;

/// The account holder's own profile page. Merges the user row with the
/// profile row; accounts that never wrote a profile still get their name,
/// email and the default avatar.
#[derive(Debug, Clone, Serialize)]
pub struct OwnProfileView {
    pub full_name: String,
    pub email: String,
    pub photo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Current position, under the label the profile page has always used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetOwnProfileError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait IGetOwnProfileUseCase {
    async fn execute(&self, user: User) -> Result<OwnProfileView, GetOwnProfileError>;
}

pub struct GetOwnProfileService<Q>
where
    Q: ProfileQuery,
{
    profile_query: Q,
}

impl<Q> GetOwnProfileService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(profile_query: Q) -> Self {
        Self { profile_query }
    }
}

#[async_trait]
impl<Q> IGetOwnProfileUseCase for GetOwnProfileService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self, user: User) -> Result<OwnProfileView, GetOwnProfileError> {
        let profile = self
            .profile_query
            .find_by_user_id(user.id)
            .await
            .map_err(|ProfileQueryError::DatabaseError(msg)| GetOwnProfileError::QueryFailed(msg))?;

        Ok(match profile {
            Some(p) => OwnProfileView {
                full_name: user.name,
                email: user.email,
                photo: p.photo,
                graduation_year: p.graduation_year,
                department: p.department,
                company: p.company,
                designation: p.current_position,
                bio: p.bio,
                location: p.location,
                linkedin: p.linkedin,
                github: p.github,
            },
            None => OwnProfileView {
                full_name: user.name,
                email: user.email,
                photo: DEFAULT_PHOTO.to_string(),
                graduation_year: None,
                department: None,
                company: None,
                designation: None,
                bio: None,
                location: None,
                linkedin: None,
                github: None,
            },
        })
    }
}
