use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// Coarse capability tier an account acts with right now.
///
/// A pending alumnus projects to `Student`: the extra evidence they filed
/// grants nothing until an admin approves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Alumni,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Alumni => "alumni",
            Role::Admin => "admin",
        }
    }
}

/// Identity details a registrant submits to claim alumni status. Held only
/// while the claim is pending and wiped on rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationEvidence {
    pub dob: NaiveDate,
    pub father_name: String,
    pub mother_name: String,
    pub scholar_no: String,
}

/// Account lifecycle state. `PendingAlumni` is the only state carrying
/// payload; every other combination of role and pending flag found in
/// storage is a corruption, not a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountStatus {
    Student,
    PendingAlumni(VerificationEvidence),
    Alumni,
    Admin,
}

impl AccountStatus {
    pub fn role(&self) -> Role {
        match self {
            AccountStatus::Student | AccountStatus::PendingAlumni(_) => Role::Student,
            AccountStatus::Alumni => Role::Alumni,
            AccountStatus::Admin => Role::Admin,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, AccountStatus::PendingAlumni(_))
    }

    pub fn evidence(&self) -> Option<&VerificationEvidence> {
        match self {
            AccountStatus::PendingAlumni(evidence) => Some(evidence),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn role(&self) -> Role {
        self.status.role()
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.status, AccountStatus::Admin)
    }

    pub fn is_verified_alumni(&self) -> bool {
        matches!(self.status, AccountStatus::Alumni)
    }
}
