use std::sync::Arc;

use super::login_user::ILoginUserUseCase;
use super::register_user::IRegisterUserUseCase;

/// Bundle of auth use cases injected into the application state.
#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn ILoginUserUseCase + Send + Sync>,
}
