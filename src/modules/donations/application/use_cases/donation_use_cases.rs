use std::sync::Arc;

use super::create_donation::ICreateDonationUseCase;
use super::delete_donation::IDeleteDonationUseCase;
use super::get_donations::IGetDonationsUseCase;

#[derive(Clone)]
pub struct DonationUseCases {
    pub create: Arc<dyn ICreateDonationUseCase + Send + Sync>,
    pub get_list: Arc<dyn IGetDonationsUseCase + Send + Sync>,
    pub delete: Arc<dyn IDeleteDonationUseCase + Send + Sync>,
}
