use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::auth::application::domain::policy::{self, Action};
use crate::modules::donations::application::ports::outgoing::donation_repository::{
    DonationRepository, DonationRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteDonationError {
    #[error("Only admins may delete donation campaigns")]
    Forbidden,

    #[error("Donation not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteDonationUseCase {
    async fn execute(&self, actor: User, donation_id: Uuid) -> Result<(), DeleteDonationError>;
}

pub struct DeleteDonationService<R>
where
    R: DonationRepository,
{
    donation_repository: R,
}

impl<R> DeleteDonationService<R>
where
    R: DonationRepository,
{
    pub fn new(donation_repository: R) -> Self {
        Self { donation_repository }
    }
}

#[async_trait]
impl<R> IDeleteDonationUseCase for DeleteDonationService<R>
where
    R: DonationRepository + Send + Sync,
{
    async fn execute(&self, actor: User, donation_id: Uuid) -> Result<(), DeleteDonationError> {
        if !policy::allows(&actor, Action::DeleteDonation) {
            return Err(DeleteDonationError::Forbidden);
        }

        self.donation_repository
            .delete(donation_id)
            .await
            .map_err(|e| match e {
                DonationRepositoryError::NotFound => DeleteDonationError::NotFound,
                DonationRepositoryError::DatabaseError(msg) => {
                    DeleteDonationError::RepositoryError(msg)
                }
            })
    }
}
