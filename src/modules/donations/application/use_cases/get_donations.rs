use async_trait::async_trait;

use crate::modules::donations::application::ports::outgoing::donation_query::{
    DonationQuery, DonationQueryError,
};
use crate::modules::donations::application::ports::outgoing::donation_repository::DonationRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetDonationsError {
    #[error("Failed to load donations: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait IGetDonationsUseCase {
    async fn execute(&self) -> Result<Vec<DonationRecord>, GetDonationsError>;
}

pub struct GetDonationsService<Q>
where
    Q: DonationQuery,
{
    donation_query: Q,
}

impl<Q> GetDonationsService<Q>
where
    Q: DonationQuery,
{
    pub fn new(donation_query: Q) -> Self {
        Self { donation_query }
    }
}

#[async_trait]
impl<Q> IGetDonationsUseCase for GetDonationsService<Q>
where
    Q: DonationQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<DonationRecord>, GetDonationsError> {
        self.donation_query
            .list()
            .await
            .map_err(|DonationQueryError::DatabaseError(msg)| GetDonationsError::QueryFailed(msg))
    }
}
