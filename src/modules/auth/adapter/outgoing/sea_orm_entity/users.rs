use sea_orm::entity::prelude::*;
use uuid::Uuid;

/// Storage projection of an account. `role` + `pending_alumni` + the four
/// evidence columns flatten the tagged domain status; `user_mapping` folds
/// them back and rejects impossible combinations. Approved alumni keep
/// their evidence columns as a historical record, only rejection clears
/// them.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub pending_alumni: bool,
    pub dob: Option<Date>,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    #[sea_orm(unique)]
    pub scholar_no: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    // Override the before_save hook
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            // Only update updated_at on UPDATE, not INSERT
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}
