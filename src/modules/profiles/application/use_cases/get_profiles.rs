use async_trait::async_trait;

use crate::modules::profiles::application::ports::outgoing::profile_query::{
    ProfileQuery, ProfileQueryError, ProfileWithUserView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProfilesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait IGetProfilesUseCase {
    async fn execute(&self) -> Result<Vec<ProfileWithUserView>, GetProfilesError>;
}

pub struct GetProfilesService<Q>
where
    Q: ProfileQuery,
{
    profile_query: Q,
}

impl<Q> GetProfilesService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(profile_query: Q) -> Self {
        Self { profile_query }
    }
}

#[async_trait]
impl<Q> IGetProfilesUseCase for GetProfilesService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ProfileWithUserView>, GetProfilesError> {
        self.profile_query
            .list_with_user()
            .await
            .map_err(|ProfileQueryError::DatabaseError(msg)| GetProfilesError::QueryFailed(msg))
    }
}
