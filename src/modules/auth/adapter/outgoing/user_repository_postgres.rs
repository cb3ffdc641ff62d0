use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AccountStatus, User};
use crate::modules::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
    Model as UserModel,
};
use super::user_mapping::map_user_model;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_row(model: UserModel) -> Result<User, UserRepositoryError> {
        map_user_model(model).map_err(UserRepositoryError::DatabaseError)
    }

    fn map_duplicate(e: sea_orm::DbErr) -> UserRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            // Two unique columns exist; the constraint name tells them apart.
            if err_str.contains("scholar") {
                return UserRepositoryError::ScholarNoTaken;
            }
            return UserRepositoryError::EmailTaken;
        }
        UserRepositoryError::DatabaseError(e.to_string())
    }

    /// Re-read the row a lifecycle update just touched so callers get the
    /// settled state back.
    async fn refetch(&self, user_id: Uuid) -> Result<User, UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        Self::map_row(user)
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: User) -> Result<User, UserRepositoryError> {
        let (role, pending_alumni, dob, father_name, mother_name, scholar_no) =
            match &user.status {
                AccountStatus::PendingAlumni(evidence) => (
                    "student",
                    true,
                    Some(evidence.dob),
                    Some(evidence.father_name.clone()),
                    Some(evidence.mother_name.clone()),
                    Some(evidence.scholar_no.clone()),
                ),
                status => (status.role().as_str(), false, None, None, None, None),
            };

        let active_user = UserActiveModel {
            id: Set(user.id),
            name: Set(user.name),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            role: Set(role.to_string()),
            pending_alumni: Set(pending_alumni),
            dob: Set(dob),
            father_name: Set(father_name),
            mother_name: Set(mother_name),
            scholar_no: Set(scholar_no),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_duplicate)?;

        Self::map_row(inserted)
    }

    async fn approve_pending_alumni(&self, user_id: Uuid) -> Result<User, UserRepositoryError> {
        // Conditional update: a row that is no longer pending matches zero
        // rows, so of two racing approvals only one wins.
        let result = UserEntity::update_many()
            .col_expr(UserColumn::Role, Expr::value("alumni"))
            .col_expr(UserColumn::PendingAlumni, Expr::value(false))
            .col_expr(UserColumn::UpdatedAt, Expr::value(chrono::Utc::now()))
            .filter(UserColumn::Id.eq(user_id))
            .filter(UserColumn::PendingAlumni.eq(true))
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        self.refetch(user_id).await
    }

    async fn reject_pending_alumni(&self, user_id: Uuid) -> Result<User, UserRepositoryError> {
        let result = UserEntity::update_many()
            .col_expr(UserColumn::PendingAlumni, Expr::value(false))
            .col_expr(UserColumn::Dob, Expr::value(Option::<chrono::NaiveDate>::None))
            .col_expr(UserColumn::FatherName, Expr::value(Option::<String>::None))
            .col_expr(UserColumn::MotherName, Expr::value(Option::<String>::None))
            .col_expr(UserColumn::ScholarNo, Expr::value(Option::<String>::None))
            .col_expr(UserColumn::UpdatedAt, Expr::value(chrono::Utc::now()))
            .filter(UserColumn::Id.eq(user_id))
            .filter(UserColumn::PendingAlumni.eq(true))
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        self.refetch(user_id).await
    }

    async fn update_name(&self, user_id: Uuid, name: &str) -> Result<(), UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active_user: UserActiveModel = user.into();
        active_user.name = Set(name.to_string());

        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let active_user: UserActiveModel = user.into();
        active_user
            .delete(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
