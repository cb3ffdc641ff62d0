use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::auth::application::domain::policy::{self, Action};
use crate::modules::events::application::ports::outgoing::event_repository::{
    EventRepository, EventRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteEventError {
    #[error("Only admins may delete events")]
    Forbidden,

    #[error("Event not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteEventUseCase {
    async fn execute(&self, actor: User, event_id: Uuid) -> Result<(), DeleteEventError>;
}

pub struct DeleteEventService<R>
where
    R: EventRepository,
{
    event_repository: R,
}

impl<R> DeleteEventService<R>
where
    R: EventRepository,
{
    pub fn new(event_repository: R) -> Self {
        Self { event_repository }
    }
}

#[async_trait]
impl<R> IDeleteEventUseCase for DeleteEventService<R>
where
    R: EventRepository + Send + Sync,
{
    async fn execute(&self, actor: User, event_id: Uuid) -> Result<(), DeleteEventError> {
        if !policy::allows(&actor, Action::DeleteEvent) {
            return Err(DeleteEventError::Forbidden);
        }

        self.event_repository
            .delete(event_id)
            .await
            .map_err(|e| match e {
                EventRepositoryError::NotFound => DeleteEventError::NotFound,
                EventRepositoryError::DatabaseError(msg) => DeleteEventError::RepositoryError(msg),
            })
    }
}
