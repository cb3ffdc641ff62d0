use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;

/// Wire projection of an account. Never carries the password hash; the
/// verification block keeps the camelCase keys the frontend already speaks
/// and disappears entirely once a claim is settled.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[schema(example = "student")]
    pub role: String,
    #[serde(rename = "pendingAlumni")]
    pub pending_alumni: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<NaiveDate>,
    #[serde(rename = "fatherName", skip_serializing_if = "Option::is_none")]
    pub father_name: Option<String>,
    #[serde(rename = "motherName", skip_serializing_if = "Option::is_none")]
    pub mother_name: Option<String>,
    #[serde(rename = "scholarNo", skip_serializing_if = "Option::is_none")]
    pub scholar_no: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        let evidence = user.status.evidence();

        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role().as_str().to_string(),
            pending_alumni: user.status.is_pending(),
            dob: evidence.map(|e| e.dob),
            father_name: evidence.map(|e| e.father_name.clone()),
            mother_name: evidence.map(|e| e.mother_name.clone()),
            scholar_no: evidence.map(|e| e.scholar_no.clone()),
            created_at: user.created_at,
        }
    }
}
