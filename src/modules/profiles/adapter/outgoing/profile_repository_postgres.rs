use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::profiles::adapter::outgoing::sea_orm_entity::profiles;
use crate::modules::profiles::application::ports::outgoing::profile_repository::{
    ProfileRecord, ProfileRepository, ProfileRepositoryError, UpsertProfileData, DEFAULT_PHOTO,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn upsert(
        &self,
        user_id: Uuid,
        data: UpsertProfileData,
    ) -> Result<ProfileRecord, ProfileRepositoryError> {
        let existing = profiles::Entity::find()
            .filter(profiles::Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        let model = match existing {
            Some(current) => {
                // Patch only the fields the caller sent; everything else
                // keeps its stored value.
                let mut active: profiles::ActiveModel = current.into();
                if let Some(bio) = data.bio {
                    active.bio = Set(Some(bio));
                }
                if let Some(year) = data.graduation_year {
                    active.graduation_year = Set(Some(year));
                }
                if let Some(department) = data.department {
                    active.department = Set(Some(department));
                }
                if let Some(linkedin) = data.linkedin {
                    active.linkedin = Set(Some(linkedin));
                }
                if let Some(github) = data.github {
                    active.github = Set(Some(github));
                }
                if let Some(position) = data.current_position {
                    active.current_position = Set(Some(position));
                }
                if let Some(company) = data.company {
                    active.company = Set(Some(company));
                }
                if let Some(location) = data.location {
                    active.location = Set(Some(location));
                }
                if let Some(photo) = data.photo {
                    active.photo = Set(photo);
                }
                active.update(&*self.db).await.map_err(map_db_err)?
            }
            None => {
                let now = Utc::now().fixed_offset();
                profiles::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    user_id: Set(user_id),
                    bio: Set(data.bio),
                    graduation_year: Set(data.graduation_year),
                    department: Set(data.department),
                    linkedin: Set(data.linkedin),
                    github: Set(data.github),
                    current_position: Set(data.current_position),
                    company: Set(data.company),
                    location: Set(data.location),
                    photo: Set(data.photo.unwrap_or_else(|| DEFAULT_PHOTO.to_string())),
                    created_at: Set(now),
                    updated_at: Set(now),
                }
                .insert(&*self.db)
                .await
                .map_err(map_db_err)?
            }
        };

        Ok(model_to_record(model))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_record(model: profiles::Model) -> ProfileRecord {
    ProfileRecord {
        id: model.id,
        user_id: model.user_id,
        bio: model.bio,
        graduation_year: model.graduation_year,
        department: model.department,
        linkedin: model.linkedin,
        github: model.github,
        current_position: model.current_position,
        company: model.company,
        location: model.location,
        photo: model.photo,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> ProfileRepositoryError {
    ProfileRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
