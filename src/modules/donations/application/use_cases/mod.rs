pub mod create_donation;
pub mod delete_donation;
pub mod donation_use_cases;
pub mod get_donations;

pub use donation_use_cases::DonationUseCases;
