use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::donations::adapter::outgoing::sea_orm_entity::donations;
use crate::modules::donations::application::ports::outgoing::donation_repository::{
    CreateDonationData, DonationRecord, DonationRepository, DonationRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct DonationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl DonationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DonationRepository for DonationRepositoryPostgres {
    async fn insert(
        &self,
        data: CreateDonationData,
    ) -> Result<DonationRecord, DonationRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = donations::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title.trim().to_string()),
            description: Set(data.description),
            goal_amount: Set(data.goal_amount),
            current_amount: Set(0),
            image_url: Set(data.image_url),
            qr_code_url: Set(data.qr_code_url),
            created_by: Set(Some(data.created_by)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_record(result))
    }

    async fn delete(&self, donation_id: Uuid) -> Result<(), DonationRepositoryError> {
        let result = donations::Entity::delete_by_id(donation_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(DonationRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_record(model: donations::Model) -> DonationRecord {
    DonationRecord {
        id: model.id,
        title: model.title,
        description: model.description,
        goal_amount: model.goal_amount,
        current_amount: model.current_amount,
        image_url: model.image_url,
        qr_code_url: model.qr_code_url,
        created_by: model.created_by,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> DonationRepositoryError {
    DonationRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
