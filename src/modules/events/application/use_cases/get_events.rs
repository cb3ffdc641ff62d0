use async_trait::async_trait;

use crate::modules::events::application::ports::outgoing::event_query::{
    EventQuery, EventQueryError,
};
use crate::modules::events::application::ports::outgoing::event_repository::EventRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetEventsError {
    #[error("Failed to load events: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait IGetEventsUseCase {
    async fn execute(&self) -> Result<Vec<EventRecord>, GetEventsError>;
}

pub struct GetEventsService<Q>
where
    Q: EventQuery,
{
    event_query: Q,
}

impl<Q> GetEventsService<Q>
where
    Q: EventQuery,
{
    pub fn new(event_query: Q) -> Self {
        Self { event_query }
    }
}

#[async_trait]
impl<Q> IGetEventsUseCase for GetEventsService<Q>
where
    Q: EventQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<EventRecord>, GetEventsError> {
        self.event_query
            .list()
            .await
            .map_err(|EventQueryError::DatabaseError(msg)| GetEventsError::QueryFailed(msg))
    }
}
