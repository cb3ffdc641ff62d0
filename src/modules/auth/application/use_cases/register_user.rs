use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::entities::{
    AccountStatus, User, VerificationEvidence,
};
use crate::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};
use crate::auth::application::use_cases::user_view::UserView;
use email_address::EmailAddress;

// ========================= Register Request =========================
/// Validated registration request - can be deserialized directly from JSON.
/// An alumni claim (role "alumni" or an explicit pendingAlumni flag) must
/// arrive with the complete evidence block or the whole request is rejected.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    name: String,
    email: String,
    password: String,
    requested_status: AccountStatus,
}

#[derive(Debug, Clone)]
pub enum RegisterRequestError {
    EmptyName,
    EmptyEmail,
    InvalidEmailFormat,
    PasswordTooShort,
    InvalidRole(String),
    MissingVerificationFields,
}

impl std::fmt::Display for RegisterRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterRequestError::EmptyName => write!(f, "Name cannot be empty"),
            RegisterRequestError::EmptyEmail => write!(f, "Email cannot be empty"),
            RegisterRequestError::InvalidEmailFormat => write!(f, "Invalid email format"),
            RegisterRequestError::PasswordTooShort => {
                write!(f, "Password must be at least 6 characters")
            }
            RegisterRequestError::InvalidRole(role) => {
                write!(f, "Cannot register with role '{}'", role)
            }
            RegisterRequestError::MissingVerificationFields => write!(
                f,
                "Alumni registration requires dob, fatherName, motherName and scholarNo"
            ),
        }
    }
}

impl std::error::Error for RegisterRequestError {}

/// Raw evidence fields as they arrive on the wire.
#[derive(Debug, Clone, Default)]
pub struct EvidenceFields {
    pub dob: Option<NaiveDate>,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub scholar_no: Option<String>,
}

impl RegisterRequest {
    pub fn new(
        name: String,
        email: String,
        password: String,
        role: Option<String>,
        pending_alumni: bool,
        evidence: EvidenceFields,
    ) -> Result<Self, RegisterRequestError> {
        let name = Self::validate_name(name)?;
        let email = Self::validate_email(email)?;
        let password = Self::validate_password(password)?;

        let role = role.unwrap_or_else(|| "student".to_string());
        let wants_alumni = pending_alumni || role == "alumni";

        let requested_status = if wants_alumni {
            AccountStatus::PendingAlumni(Self::validate_evidence(evidence)?)
        } else {
            match role.as_str() {
                "student" => AccountStatus::Student,
                // Admin accounts are provisioned out of band, never via
                // self-registration.
                other => return Err(RegisterRequestError::InvalidRole(other.to_string())),
            }
        };

        Ok(Self {
            name,
            email,
            password,
            requested_status,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn requested_status(&self) -> &AccountStatus {
        &self.requested_status
    }

    // ------------------------
    // Validation helpers
    // ------------------------

    fn validate_name(name: String) -> Result<String, RegisterRequestError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(RegisterRequestError::EmptyName);
        }

        Ok(name.to_string())
    }

    fn validate_email(email: String) -> Result<String, RegisterRequestError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(RegisterRequestError::EmptyEmail);
        }

        if !EmailAddress::is_valid(email) {
            return Err(RegisterRequestError::InvalidEmailFormat);
        }

        Ok(email.to_lowercase())
    }

    fn validate_password(password: String) -> Result<String, RegisterRequestError> {
        let password = password.trim();

        if password.len() < 6 {
            return Err(RegisterRequestError::PasswordTooShort);
        }

        Ok(password.to_string())
    }

    fn validate_evidence(
        evidence: EvidenceFields,
    ) -> Result<VerificationEvidence, RegisterRequestError> {
        let non_empty = |field: Option<String>| {
            field
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        match (
            evidence.dob,
            non_empty(evidence.father_name),
            non_empty(evidence.mother_name),
            non_empty(evidence.scholar_no),
        ) {
            (Some(dob), Some(father_name), Some(mother_name), Some(scholar_no)) => {
                Ok(VerificationEvidence {
                    dob,
                    father_name,
                    mother_name,
                    scholar_no,
                })
            }
            _ => Err(RegisterRequestError::MissingVerificationFields),
        }
    }
}

// Custom deserialization that validates during parsing
impl<'de> Deserialize<'de> for RegisterRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RegisterRequestHelper {
            // Older frontend builds send full_name instead of name.
            name: Option<String>,
            full_name: Option<String>,
            email: String,
            password: String,
            role: Option<String>,
            #[serde(rename = "pendingAlumni", default)]
            pending_alumni: bool,
            dob: Option<NaiveDate>,
            #[serde(rename = "fatherName")]
            father_name: Option<String>,
            #[serde(rename = "motherName")]
            mother_name: Option<String>,
            #[serde(rename = "scholarNo")]
            scholar_no: Option<String>,
        }

        let helper = RegisterRequestHelper::deserialize(deserializer)?;
        let name = helper
            .name
            .or(helper.full_name)
            .ok_or_else(|| serde::de::Error::custom(RegisterRequestError::EmptyName))?;

        RegisterRequest::new(
            name,
            helper.email,
            helper.password,
            helper.role,
            helper.pending_alumni,
            EvidenceFields {
                dob: helper.dob,
                father_name: helper.father_name,
                mother_name: helper.mother_name,
                scholar_no: helper.scholar_no,
            },
        )
        .map_err(serde::de::Error::custom)
    }
}

// ====================== Register Error =============================
#[derive(Debug, Clone)]
pub enum RegisterError {
    EmailTaken,
    ScholarNoTaken,
    HashingFailed(String),
    TokenGenerationFailed(String),
    RepositoryError(String),
}

impl std::fmt::Display for RegisterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterError::EmailTaken => write!(f, "User already exists"),
            RegisterError::ScholarNoTaken => write!(f, "Scholar number already registered"),
            RegisterError::HashingFailed(msg) => write!(f, "Password hashing failed: {}", msg),
            RegisterError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            RegisterError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for RegisterError {}

// ============================ Register Response ============================
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct RegisterUserResponse {
    pub message: String,
    /// Absent for pending registrations: a pending applicant cannot act
    /// until an admin approves them, so no session is minted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub user: UserView,
}

// ========================= Register User Use Case =========================
#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, request: RegisterRequest)
        -> Result<RegisterUserResponse, RegisterError>;
}

#[derive(Debug, Clone)]
pub struct RegisterUserUseCase<R, H, T>
where
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
    T: TokenProvider + Send + Sync,
{
    repository: R,
    password_hasher: H,
    token_provider: T,
}

impl<R, H, T> RegisterUserUseCase<R, H, T>
where
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
    T: TokenProvider + Send + Sync,
{
    pub fn new(repository: R, password_hasher: H, token_provider: T) -> Self {
        Self {
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<R, H, T> IRegisterUserUseCase for RegisterUserUseCase<R, H, T>
where
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
    T: TokenProvider + Send + Sync,
{
    async fn execute(
        &self,
        request: RegisterRequest,
    ) -> Result<RegisterUserResponse, RegisterError> {
        let password_hash = self
            .password_hasher
            .hash_password(request.password())
            .await
            .map_err(|e| RegisterError::HashingFailed(e.to_string()))?;

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: request.name().to_string(),
            email: request.email().to_string(),
            password_hash,
            status: request.requested_status().clone(),
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create_user(user).await.map_err(|e| match e {
            UserRepositoryError::EmailTaken => RegisterError::EmailTaken,
            UserRepositoryError::ScholarNoTaken => RegisterError::ScholarNoTaken,
            other => RegisterError::RepositoryError(other.to_string()),
        })?;

        if created.status.is_pending() {
            return Ok(RegisterUserResponse {
                message: "Registration successful. Pending admin verification.".to_string(),
                token: None,
                user: UserView::from(&created),
            });
        }

        let token = self
            .token_provider
            .generate_access_token(created.id)
            .map_err(|e| RegisterError::TokenGenerationFailed(e.to_string()))?;

        Ok(RegisterUserResponse {
            message: "User registered successfully".to_string(),
            token: Some(token),
            user: UserView::from(&created),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::auth::application::ports::outgoing::password_hasher::HashError;
    use serde_json::json;

    fn evidence_fields() -> EvidenceFields {
        EvidenceFields {
            dob: NaiveDate::from_ymd_opt(1998, 4, 17),
            father_name: Some("Ramesh".to_string()),
            mother_name: Some("Sunita".to_string()),
            scholar_no: Some("181112099".to_string()),
        }
    }

    // ==================== RegisterRequest Tests ====================
    #[test]
    fn test_register_request_student() {
        let request = RegisterRequest::new(
            "Asha Verma".to_string(),
            "Asha@Example.COM ".to_string(),
            "secret1".to_string(),
            Some("student".to_string()),
            false,
            EvidenceFields::default(),
        )
        .unwrap();

        assert_eq!(request.name(), "Asha Verma");
        assert_eq!(request.email(), "asha@example.com");
        assert_eq!(request.requested_status(), &AccountStatus::Student);
    }

    #[test]
    fn test_register_request_role_defaults_to_student() {
        let request = RegisterRequest::new(
            "Asha".to_string(),
            "asha@example.com".to_string(),
            "secret1".to_string(),
            None,
            false,
            EvidenceFields::default(),
        )
        .unwrap();

        assert_eq!(request.requested_status(), &AccountStatus::Student);
    }

    #[test]
    fn test_register_request_alumni_role_becomes_pending() {
        let request = RegisterRequest::new(
            "Asha".to_string(),
            "asha@example.com".to_string(),
            "secret1".to_string(),
            Some("alumni".to_string()),
            false,
            evidence_fields(),
        )
        .unwrap();

        assert!(request.requested_status().is_pending());
    }

    #[test]
    fn test_register_request_pending_flag_becomes_pending() {
        let request = RegisterRequest::new(
            "Asha".to_string(),
            "asha@example.com".to_string(),
            "secret1".to_string(),
            Some("student".to_string()),
            true,
            evidence_fields(),
        )
        .unwrap();

        assert!(request.requested_status().is_pending());
    }

    #[test]
    fn test_register_request_alumni_without_evidence_rejected() {
        let result = RegisterRequest::new(
            "Asha".to_string(),
            "asha@example.com".to_string(),
            "secret1".to_string(),
            Some("alumni".to_string()),
            false,
            EvidenceFields {
                dob: NaiveDate::from_ymd_opt(1998, 4, 17),
                father_name: Some("Ramesh".to_string()),
                mother_name: None,
                scholar_no: Some("181112099".to_string()),
            },
        );

        assert!(matches!(
            result,
            Err(RegisterRequestError::MissingVerificationFields)
        ));
    }

    #[test]
    fn test_register_request_blank_evidence_field_rejected() {
        let mut evidence = evidence_fields();
        evidence.scholar_no = Some("   ".to_string());

        let result = RegisterRequest::new(
            "Asha".to_string(),
            "asha@example.com".to_string(),
            "secret1".to_string(),
            None,
            true,
            evidence,
        );

        assert!(matches!(
            result,
            Err(RegisterRequestError::MissingVerificationFields)
        ));
    }

    #[test]
    fn test_register_request_admin_role_rejected() {
        let result = RegisterRequest::new(
            "Asha".to_string(),
            "asha@example.com".to_string(),
            "secret1".to_string(),
            Some("admin".to_string()),
            false,
            EvidenceFields::default(),
        );

        assert!(matches!(result, Err(RegisterRequestError::InvalidRole(_))));
    }

    #[test]
    fn test_register_request_short_password() {
        let result = RegisterRequest::new(
            "Asha".to_string(),
            "asha@example.com".to_string(),
            "12345".to_string(),
            None,
            false,
            EvidenceFields::default(),
        );

        assert!(matches!(result, Err(RegisterRequestError::PasswordTooShort)));
    }

    #[test]
    fn test_register_request_invalid_email() {
        let result = RegisterRequest::new(
            "Asha".to_string(),
            "not-an-email".to_string(),
            "secret1".to_string(),
            None,
            false,
            EvidenceFields::default(),
        );

        assert!(matches!(
            result,
            Err(RegisterRequestError::InvalidEmailFormat)
        ));
    }

    #[test]
    fn test_register_request_deserialize_full_name_fallback() {
        let json = json!({
            "full_name": "Asha Verma",
            "email": "asha@example.com",
            "password": "secret1"
        });

        let request: RegisterRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.name(), "Asha Verma");
    }

    #[test]
    fn test_register_request_deserialize_pending_with_evidence() {
        let json = json!({
            "name": "Asha Verma",
            "email": "asha@example.com",
            "password": "secret1",
            "role": "alumni",
            "dob": "1998-04-17",
            "fatherName": "Ramesh",
            "motherName": "Sunita",
            "scholarNo": "181112099"
        });

        let request: RegisterRequest = serde_json::from_value(json).unwrap();
        match request.requested_status() {
            AccountStatus::PendingAlumni(evidence) => {
                assert_eq!(evidence.scholar_no, "181112099");
            }
            other => panic!("Expected PendingAlumni, got {other:?}"),
        }
    }

    #[test]
    fn test_register_request_deserialize_missing_name_keys() {
        let json = json!({
            "email": "asha@example.com",
            "password": "secret1"
        });

        let result: Result<RegisterRequest, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }

    // ==================== RegisterUserUseCase Tests ====================

    struct MockUserRepository {
        fail_with: Option<UserRepositoryError>,
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn create_user(&self, user: User) -> Result<User, UserRepositoryError> {
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(user),
            }
        }

        async fn approve_pending_alumni(&self, _: Uuid) -> Result<User, UserRepositoryError> {
            unimplemented!("Not used in this test")
        }

        async fn reject_pending_alumni(&self, _: Uuid) -> Result<User, UserRepositoryError> {
            unimplemented!("Not used in this test")
        }

        async fn update_name(&self, _: Uuid, _: &str) -> Result<(), UserRepositoryError> {
            unimplemented!("Not used in this test")
        }

        async fn delete_user(&self, _: Uuid) -> Result<(), UserRepositoryError> {
            unimplemented!("Not used in this test")
        }
    }

    struct MockPasswordHasher {
        should_fail: bool,
    }

    #[async_trait]
    impl PasswordHasher for MockPasswordHasher {
        async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
            if self.should_fail {
                return Err(HashError::HashFailed);
            }
            Ok("hashed_password".to_string())
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            Ok(true)
        }
    }

    fn create_jwt_service() -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            secret_key: "test_secret_key_min_32_characters_long".to_string(),
            issuer: "testapp".to_string(),
            access_token_expiry: 604800,
        })
    }

    fn student_request() -> RegisterRequest {
        RegisterRequest::new(
            "Asha Verma".to_string(),
            "asha@example.com".to_string(),
            "secret1".to_string(),
            None,
            false,
            EvidenceFields::default(),
        )
        .unwrap()
    }

    fn pending_request() -> RegisterRequest {
        RegisterRequest::new(
            "Asha Verma".to_string(),
            "asha@example.com".to_string(),
            "secret1".to_string(),
            Some("alumni".to_string()),
            false,
            evidence_fields(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_register_student_returns_token() {
        let use_case = RegisterUserUseCase::new(
            MockUserRepository { fail_with: None },
            MockPasswordHasher { should_fail: false },
            create_jwt_service(),
        );

        let result = use_case.execute(student_request()).await;

        assert!(result.is_ok());
        let response = result.unwrap();
        assert_eq!(response.message, "User registered successfully");
        assert!(response.token.is_some());
        assert_eq!(response.user.role, "student");
        assert!(!response.user.pending_alumni);
    }

    #[tokio::test]
    async fn test_register_pending_alumni_returns_no_token() {
        let use_case = RegisterUserUseCase::new(
            MockUserRepository { fail_with: None },
            MockPasswordHasher { should_fail: false },
            create_jwt_service(),
        );

        let result = use_case.execute(pending_request()).await;

        assert!(result.is_ok());
        let response = result.unwrap();
        assert_eq!(
            response.message,
            "Registration successful. Pending admin verification."
        );
        assert!(response.token.is_none());
        assert_eq!(response.user.role, "student");
        assert!(response.user.pending_alumni);
        assert_eq!(response.user.scholar_no.as_deref(), Some("181112099"));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let use_case = RegisterUserUseCase::new(
            MockUserRepository {
                fail_with: Some(UserRepositoryError::EmailTaken),
            },
            MockPasswordHasher { should_fail: false },
            create_jwt_service(),
        );

        let result = use_case.execute(student_request()).await;

        assert!(matches!(result, Err(RegisterError::EmailTaken)));
    }

    #[tokio::test]
    async fn test_register_duplicate_scholar_no() {
        let use_case = RegisterUserUseCase::new(
            MockUserRepository {
                fail_with: Some(UserRepositoryError::ScholarNoTaken),
            },
            MockPasswordHasher { should_fail: false },
            create_jwt_service(),
        );

        let result = use_case.execute(pending_request()).await;

        assert!(matches!(result, Err(RegisterError::ScholarNoTaken)));
    }

    #[tokio::test]
    async fn test_register_hashing_failure() {
        let use_case = RegisterUserUseCase::new(
            MockUserRepository { fail_with: None },
            MockPasswordHasher { should_fail: true },
            create_jwt_service(),
        );

        let result = use_case.execute(student_request()).await;

        assert!(matches!(result, Err(RegisterError::HashingFailed(_))));
    }

    #[tokio::test]
    async fn test_register_repository_failure() {
        let use_case = RegisterUserUseCase::new(
            MockUserRepository {
                fail_with: Some(UserRepositoryError::DatabaseError(
                    "connection timeout".to_string(),
                )),
            },
            MockPasswordHasher { should_fail: false },
            create_jwt_service(),
        );

        let result = use_case.execute(student_request()).await;

        assert!(matches!(result, Err(RegisterError::RepositoryError(_))));
    }
}
