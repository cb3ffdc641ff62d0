pub mod auth_use_cases;
pub mod login_user;
pub mod register_user;
pub mod user_view;

pub use auth_use_cases::AuthUseCases;
