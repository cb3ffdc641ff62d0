use async_trait::async_trait;

use crate::auth::application::domain::entities::User;
use crate::auth::application::domain::policy::{self, Action};
use crate::modules::donations::application::ports::outgoing::donation_repository::{
    CreateDonationData, DonationRecord, DonationRepository, DonationRepositoryError,
};

#[derive(Debug, Clone)]
pub struct CreateDonationInput {
    pub title: String,
    pub description: String,
    pub goal_amount: i64,
    pub image_url: Option<String>,
    pub qr_code_url: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateDonationError {
    #[error("Only admins may create donation campaigns")]
    Forbidden,

    #[error("Title, description and goal amount are required")]
    MissingFields,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateDonationUseCase {
    async fn execute(
        &self,
        actor: User,
        input: CreateDonationInput,
    ) -> Result<DonationRecord, CreateDonationError>;
}

pub struct CreateDonationService<R>
where
    R: DonationRepository,
{
    donation_repository: R,
}

impl<R> CreateDonationService<R>
where
    R: DonationRepository,
{
    pub fn new(donation_repository: R) -> Self {
        Self { donation_repository }
    }
}

#[async_trait]
impl<R> ICreateDonationUseCase for CreateDonationService<R>
where
    R: DonationRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: User,
        input: CreateDonationInput,
    ) -> Result<DonationRecord, CreateDonationError> {
        if !policy::allows(&actor, Action::CreateDonation) {
            return Err(CreateDonationError::Forbidden);
        }

        if input.title.trim().is_empty() || input.description.trim().is_empty() {
            return Err(CreateDonationError::MissingFields);
        }

        let data = CreateDonationData {
            created_by: actor.id,
            title: input.title,
            description: input.description,
            goal_amount: input.goal_amount,
            image_url: input.image_url,
            qr_code_url: input.qr_code_url,
        };

        self.donation_repository
            .insert(data)
            .await
            .map_err(|e| match e {
                DonationRepositoryError::NotFound => CreateDonationError::RepositoryError(
                    "unexpected not found on insert".to_string(),
                ),
                DonationRepositoryError::DatabaseError(msg) => {
                    CreateDonationError::RepositoryError(msg)
                }
            })
    }
}
