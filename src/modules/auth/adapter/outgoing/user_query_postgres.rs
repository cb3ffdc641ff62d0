use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity};
use super::user_mapping::map_user_model;
use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::user_query::UserQueryError;
use crate::modules::auth::application::ports::outgoing::UserQuery;
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_row(model: super::sea_orm_entity::users::Model) -> Result<User, UserQueryError> {
        map_user_model(model).map_err(UserQueryError::CorruptRecord)
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        user.map(Self::map_row).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        user.map(Self::map_row).transpose()
    }

    async fn list_all(&self) -> Result<Vec<User>, UserQueryError> {
        let users = UserEntity::find()
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        users.into_iter().map(Self::map_row).collect()
    }

    async fn list_pending_alumni(&self) -> Result<Vec<User>, UserQueryError> {
        let users = UserEntity::find()
            .filter(UserColumn::PendingAlumni.eq(true))
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        users.into_iter().map(Self::map_row).collect()
    }

    async fn list_alumni(&self) -> Result<Vec<User>, UserQueryError> {
        let users = UserEntity::find()
            .filter(UserColumn::Role.eq("alumni"))
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        users.into_iter().map(Self::map_row).collect()
    }

    async fn count_users(&self) -> Result<u64, UserQueryError> {
        UserEntity::find()
            .count(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))
    }

    async fn count_alumni(&self) -> Result<u64, UserQueryError> {
        UserEntity::find()
            .filter(UserColumn::Role.eq("alumni"))
            .count(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))
    }
}
