use super::sea_orm_entity::users::Model as UserModel;
use crate::auth::application::domain::entities::{AccountStatus, User, VerificationEvidence};

/// Folds the flattened storage columns back into the tagged account status
/// and the domain user. Both the repository and the query adapter go through
/// here so corrupt rows are rejected identically on every read path.
pub(crate) fn map_user_model(model: UserModel) -> Result<User, String> {
    let status = fold_status(&model)?;

    Ok(User {
        id: model.id,
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
        status,
        created_at: model.created_at.with_timezone(&chrono::Utc),
        updated_at: model.updated_at.with_timezone(&chrono::Utc),
    })
}

fn fold_status(model: &UserModel) -> Result<AccountStatus, String> {
    if model.pending_alumni {
        // Only a student-role row may be pending, and it must carry the
        // full evidence set it registered with.
        if model.role != "student" {
            return Err(format!(
                "user {} is pending but holds role '{}'",
                model.id, model.role
            ));
        }
        return match (
            model.dob,
            &model.father_name,
            &model.mother_name,
            &model.scholar_no,
        ) {
            (Some(dob), Some(father), Some(mother), Some(scholar)) => {
                Ok(AccountStatus::PendingAlumni(VerificationEvidence {
                    dob,
                    father_name: father.clone(),
                    mother_name: mother.clone(),
                    scholar_no: scholar.clone(),
                }))
            }
            _ => Err(format!(
                "user {} is pending with incomplete verification evidence",
                model.id
            )),
        };
    }

    match model.role.as_str() {
        "student" => Ok(AccountStatus::Student),
        "alumni" => Ok(AccountStatus::Alumni),
        "admin" => Ok(AccountStatus::Admin),
        other => Err(format!("user {} holds unknown role '{}'", model.id, other)),
    }
}
