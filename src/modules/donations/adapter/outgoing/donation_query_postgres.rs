use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder};
use std::sync::Arc;

use crate::modules::donations::adapter::outgoing::sea_orm_entity::donations;
use crate::modules::donations::application::ports::outgoing::donation_query::{
    DonationQuery, DonationQueryError,
};
use crate::modules::donations::application::ports::outgoing::donation_repository::DonationRecord;

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct DonationQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl DonationQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DonationQuery for DonationQueryPostgres {
    async fn list(&self) -> Result<Vec<DonationRecord>, DonationQueryError> {
        let models = donations::Entity::find()
            .order_by_desc(donations::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_record).collect())
    }

    async fn count_donations(&self) -> Result<u64, DonationQueryError> {
        donations::Entity::find()
            .count(&*self.db)
            .await
            .map_err(map_db_err)
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

fn map_db_err(e: DbErr) -> DonationQueryError {
    DonationQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
