mod create_donation;
mod delete_donation;
mod get_donations;

pub use create_donation::create_donation_handler;
pub use delete_donation::delete_donation_handler;
pub use get_donations::get_donations_handler;
