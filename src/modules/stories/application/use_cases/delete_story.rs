use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::auth::application::domain::policy::{self, Action};
use crate::modules::stories::application::ports::outgoing::story_repository::{
    StoryRepository, StoryRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteStoryError {
    #[error("Only admins may delete stories")]
    Forbidden,

    #[error("Story not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteStoryUseCase {
    async fn execute(&self, actor: User, story_id: Uuid) -> Result<(), DeleteStoryError>;
}

pub struct DeleteStoryService<R>
where
    R: StoryRepository,
{
    story_repository: R,
}

impl<R> DeleteStoryService<R>
where
    R: StoryRepository,
{
    pub fn new(story_repository: R) -> Self {
        Self { story_repository }
    }
}

#[async_trait]
impl<R> IDeleteStoryUseCase for DeleteStoryService<R>
where
    R: StoryRepository + Send + Sync,
{
    async fn execute(&self, actor: User, story_id: Uuid) -> Result<(), DeleteStoryError> {
        if !policy::allows(&actor, Action::DeleteStory) {
            return Err(DeleteStoryError::Forbidden);
        }

        self.story_repository
            .delete(story_id)
            .await
            .map_err(|e| match e {
                StoryRepositoryError::NotFound => DeleteStoryError::NotFound,
                StoryRepositoryError::DatabaseError(msg) => DeleteStoryError::RepositoryError(msg),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    use crate::auth::application::domain::entities::AccountStatus;
    use crate::modules::stories::application::ports::outgoing::story_repository::{
        CreateStoryData, StoryRecord,
    };

    struct MockStoryRepo {
        result: Result<(), StoryRepositoryError>,
        deleted: Mutex<Option<Uuid>>,
    }

    impl MockStoryRepo {
        fn returning(result: Result<(), StoryRepositoryError>) -> Self {
            Self {
                result,
                deleted: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl StoryRepository for MockStoryRepo {
        async fn insert(
            &self,
            _data: CreateStoryData,
        ) -> Result<StoryRecord, StoryRepositoryError> {
            unimplemented!("not needed for delete_story tests")
        }

        async fn delete(&self, story_id: Uuid) -> Result<(), StoryRepositoryError> {
            *self.deleted.lock().unwrap() = Some(story_id);
            self.result.clone()
        }
    }

    fn user_with(status: AccountStatus) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Asha Verma".to_string(),
            email: "asha@example.com".to_string(),
            password_hash: "$2b$10$hash".to_string(),
            status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_admin_deletes_story() {
        let repo = MockStoryRepo::returning(Ok(()));
        let service = DeleteStoryService::new(repo);
        let story_id = Uuid::new_v4();

        service
            .execute(user_with(AccountStatus::Admin), story_id)
            .await
            .unwrap();

        assert_eq!(*service.story_repository.deleted.lock().unwrap(), Some(story_id));
    }

    #[tokio::test]
    async fn test_non_admin_is_forbidden_before_any_delete() {
        let repo = MockStoryRepo::returning(Ok(()));
        let service = DeleteStoryService::new(repo);

        let err = service
            .execute(user_with(AccountStatus::Student), Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(err, DeleteStoryError::Forbidden));
        assert!(service.story_repository.deleted.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_story_is_not_found() {
        let repo = MockStoryRepo::returning(Err(StoryRepositoryError::NotFound));
        let service = DeleteStoryService::new(repo);

        let err = service
            .execute(user_with(AccountStatus::Admin), Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(err, DeleteStoryError::NotFound));
    }

    #[tokio::test]
    async fn test_database_error_is_propagated() {
        let repo = MockStoryRepo::returning(Err(StoryRepositoryError::DatabaseError(
            "connection lost".to_string(),
        )));
        let service = DeleteStoryService::new(repo);

        let err = service
            .execute(user_with(AccountStatus::Admin), Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(err, DeleteStoryError::RepositoryError(_)));
    }
}
