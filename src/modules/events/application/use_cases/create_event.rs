use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::User;
use crate::auth::application::domain::policy::{self, Action};
use crate::modules::events::application::ports::outgoing::event_repository::{
    CreateEventData, EventRecord, EventRepository, EventRepositoryError,
};

#[derive(Debug, Clone)]
pub struct CreateEventInput {
    pub title: String,
    pub description: Option<String>,
    pub event_date: DateTime<Utc>,
    pub location: String,
    pub max_participants: Option<i32>,
    pub image_url: Option<String>,
    pub application_link: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateEventError {
    #[error("Only admins may create events")]
    Forbidden,

    #[error("Title, event date and location are required")]
    MissingFields,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateEventUseCase {
    async fn execute(
        &self,
        actor: User,
        input: CreateEventInput,
    ) -> Result<EventRecord, CreateEventError>;
}

pub struct CreateEventService<R>
where
    R: EventRepository,
{
    event_repository: R,
}

impl<R> CreateEventService<R>
where
    R: EventRepository,
{
    pub fn new(event_repository: R) -> Self {
        Self { event_repository }
    }
}

#[async_trait]
impl<R> ICreateEventUseCase for CreateEventService<R>
where
    R: EventRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: User,
        input: CreateEventInput,
    ) -> Result<EventRecord, CreateEventError> {
        if !policy::allows(&actor, Action::CreateEvent) {
            return Err(CreateEventError::Forbidden);
        }

        if input.title.trim().is_empty() || input.location.trim().is_empty() {
            return Err(CreateEventError::MissingFields);
        }

        let data = CreateEventData {
            created_by: actor.id,
            title: input.title,
            description: input.description.unwrap_or_default(),
            event_date: input.event_date,
            location: input.location,
            max_participants: input.max_participants,
            image_url: input.image_url,
            application_link: input.application_link,
        };

        self.event_repository
            .insert(data)
            .await
            .map_err(|e| match e {
                EventRepositoryError::NotFound => {
                    CreateEventError::RepositoryError("unexpected not found on insert".to_string())
                }
                EventRepositoryError::DatabaseError(msg) => CreateEventError::RepositoryError(msg),
            })
    }
}
