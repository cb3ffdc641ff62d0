use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::{AccountStatus, User, VerificationEvidence};

fn base_user(name: &str, email: &str, status: AccountStatus) -> User {
    User {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
        password_hash: "$2b$12$test.hash.only".to_string(),
        status,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn student_user() -> User {
    base_user("Priya Verma", "priya@example.com", AccountStatus::Student)
}

pub fn alumni_user() -> User {
    base_user("Ravi Sharma", "ravi@example.com", AccountStatus::Alumni)
}

pub fn admin_user() -> User {
    base_user("Admin", "admin@example.com", AccountStatus::Admin)
}

pub fn pending_user() -> User {
    base_user(
        "Aman Gupta",
        "aman@example.com",
        AccountStatus::PendingAlumni(VerificationEvidence {
            dob: NaiveDate::from_ymd_opt(1998, 4, 17).unwrap(),
            father_name: "Ramesh Gupta".to_string(),
            mother_name: "Sunita Gupta".to_string(),
            scholar_no: "181112099".to_string(),
        }),
    )
}
