use std::sync::Arc;

use super::create_event::ICreateEventUseCase;
use super::delete_event::IDeleteEventUseCase;
use super::get_events::IGetEventsUseCase;

#[derive(Clone)]
pub struct EventUseCases {
    pub create: Arc<dyn ICreateEventUseCase + Send + Sync>,
    pub get_list: Arc<dyn IGetEventsUseCase + Send + Sync>,
    pub delete: Arc<dyn IDeleteEventUseCase + Send + Sync>,
}
