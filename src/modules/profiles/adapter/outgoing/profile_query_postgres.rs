use async_trait::async_trait;

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::profiles::adapter::outgoing::sea_orm_entity::profiles;
use crate::modules::profiles::application::ports::outgoing::profile_query::{
    ProfileQuery, ProfileQueryError, ProfileUserView, ProfileWithUserView,
};
use crate::modules::profiles::application::ports::outgoing::profile_repository::ProfileRecord;

// ============================================================================
// Query Implementation
// ============================================================================

/// Read side of the profile store. The public listing joins each row to its
/// owner; the other reads return bare rows.
#[derive(Clone)]
pub struct ProfileQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileQuery for ProfileQueryPostgres {
    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<ProfileRecord>, ProfileQueryError> {
        let row = profiles::Entity::find()
            .filter(profiles::Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(model_to_record))
    }

    async fn list_with_user(&self) -> Result<Vec<ProfileWithUserView>, ProfileQueryError> {
        let rows = profiles::Entity::find()
            .find_also_related(users::Entity)
            .order_by_desc(profiles::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter()
            .map(|(profile, owner)| {
                let owner = require_owner(owner, profile.id)?;
                Ok(build_profile_view(profile, owner))
            })
            .collect()
    }

    async fn list_by_user_ids(
        &self,
        user_ids: &[Uuid],
    ) -> Result<Vec<ProfileRecord>, ProfileQueryError> {
        let rows = profiles::Entity::find()
            .filter(profiles::Column::UserId.is_in(user_ids.iter().copied()))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_record).collect())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Profiles cascade-delete with their user, so a missing owner row means the
/// data is corrupt rather than merely stale.
fn require_owner(
    owner: Option<users::Model>,
    profile_id: Uuid,
) -> Result<users::Model, ProfileQueryError> {
    owner.ok_or_else(|| {
        ProfileQueryError::DatabaseError(format!("profile {} has no user row", profile_id))
    })
}

fn build_profile_view(profile: profiles::Model, owner: users::Model) -> ProfileWithUserView {
    ProfileWithUserView {
        id: profile.id,
        user: ProfileUserView {
            id: owner.id,
            name: owner.name,
            email: owner.email,
            role: owner.role,
        },
        bio: profile.bio,
        graduation_year: profile.graduation_year,
        department: profile.department,
        linkedin: profile.linkedin,
        github: profile.github,
        current_position: profile.current_position,
        company: profile.company,
        location: profile.location,
        photo: profile.photo,
        created_at: profile.created_at.into(),
        updated_at: profile.updated_at.into(),
    }
}

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

fn map_db_err(e: DbErr) -> ProfileQueryError {
    ProfileQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
