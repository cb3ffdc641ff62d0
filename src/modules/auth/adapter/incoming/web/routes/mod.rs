mod fetch_me;
mod login_user;
mod register_user;

pub use fetch_me::fetch_me_handler;
pub use login_user::login_user_handler;
pub use register_user::register_user_handler;

// Re-exports for the OpenAPI document: the request DTOs plus the hidden
// path items utoipa generates next to each annotated handler.
pub use fetch_me::__path_fetch_me_handler;
pub use login_user::{LoginRequestDto, __path_login_user_handler};
pub use register_user::{RegisterUserRequest, __path_register_user_handler};
