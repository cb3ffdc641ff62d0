use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::register_user::{
    EvidenceFields, RegisterError, RegisterRequest, RegisterUserResponse,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Request body for user registration
#[derive(Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    /// Display name
    #[schema(example = "Asha Verma")]
    pub name: Option<String>,

    /// Legacy alias for name, still sent by older clients
    pub full_name: Option<String>,

    /// Email address
    #[schema(example = "asha@example.com")]
    pub email: String,

    /// Password (minimum 6 characters)
    #[schema(example = "secret1")]
    pub password: String,

    /// Requested role: "student" (default) or "alumni"
    #[schema(example = "alumni")]
    pub role: Option<String>,

    /// Explicit request for alumni verification
    #[serde(rename = "pendingAlumni", default)]
    pub pending_alumni: bool,

    /// Date of birth, part of the alumni verification evidence
    #[schema(example = "1998-04-17")]
    pub dob: Option<NaiveDate>,

    /// Father's name, part of the alumni verification evidence
    #[serde(rename = "fatherName")]
    pub father_name: Option<String>,

    /// Mother's name, part of the alumni verification evidence
    #[serde(rename = "motherName")]
    pub mother_name: Option<String>,

    /// College scholar number, part of the alumni verification evidence
    #[serde(rename = "scholarNo")]
    #[schema(example = "181112099")]
    pub scholar_no: Option<String>,
}

fn map_register_error(err: RegisterError, email: &str) -> HttpResponse {
    match &err {
        RegisterError::EmailTaken => {
            warn!(email = %email, "Registration rejected: email already registered");
            ApiResponse::conflict("USER_ALREADY_EXISTS", "User already exists")
        }

        RegisterError::ScholarNoTaken => {
            warn!(email = %email, "Registration rejected: scholar number already registered");
            ApiResponse::conflict("SCHOLAR_NO_TAKEN", "Scholar number already registered")
        }

        other => {
            error!(email = %email, error = %other, "User registration failed");
            ApiResponse::internal_error()
        }
    }
}

/// Register a new user
///
/// Students get an access token straight away. Alumni registrations are parked
/// as pending until an admin verifies the submitted evidence, so the response
/// carries no token for them.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (
            status = 201,
            description = "User registered",
            body = inline(SuccessResponse<RegisterUserResponse>),
            examples(
                ("Student" = (value = json!({
                    "success": true,
                    "data": {
                        "message": "User registered successfully",
                        "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                        "user": {
                            "id": "123e4567-e89b-12d3-a456-426614174000",
                            "name": "Asha Verma",
                            "email": "asha@example.com",
                            "role": "student",
                            "pendingAlumni": false,
                            "created_at": "2024-06-01T10:00:00Z"
                        }
                    }
                }))),
                ("Pending alumni" = (value = json!({
                    "success": true,
                    "data": {
                        "message": "Registration successful. Pending admin verification.",
                        "user": {
                            "id": "123e4567-e89b-12d3-a456-426614174000",
                            "name": "Asha Verma",
                            "email": "asha@example.com",
                            "role": "student",
                            "pendingAlumni": true,
                            "dob": "1998-04-17",
                            "fatherName": "Ramesh",
                            "motherName": "Sunita",
                            "scholarNo": "181112099",
                            "created_at": "2024-06-01T10:00:00Z"
                        }
                    }
                })))
            )
        ),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse,
            examples(
                ("Invalid email" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "VALIDATION_ERROR",
                        "message": "Invalid email format"
                    }
                }))),
                ("Missing evidence" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "VALIDATION_ERROR",
                        "message": "Alumni registration requires dob, fatherName, motherName and scholarNo"
                    }
                })))
            )
        ),
        (
            status = 409,
            description = "Email or scholar number already registered",
            body = ErrorResponse,
            examples(
                ("Email taken" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "USER_ALREADY_EXISTS",
                        "message": "User already exists"
                    }
                }))),
                ("Scholar number taken" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "SCHOLAR_NO_TAKEN",
                        "message": "Scholar number already registered"
                    }
                })))
            )
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INTERNAL_ERROR",
                    "message": "An unexpected error occurred"
                }
            })
        ),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(email = %dto.email, "User registration attempt");

    let name = dto.name.or(dto.full_name).unwrap_or_default();
    let request = match RegisterRequest::new(
        name,
        dto.email.clone(),
        dto.password,
        dto.role,
        dto.pending_alumni,
        EvidenceFields {
            dob: dto.dob,
            father_name: dto.father_name,
            mother_name: dto.mother_name,
            scholar_no: dto.scholar_no,
        },
    ) {
        Ok(request) => request,
        Err(e) => {
            warn!(email = %dto.email, error = %e, "Invalid registration input");
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match data.auth.register.execute(request).await {
        Ok(response) => {
            info!(
                user_id = %response.user.id,
                email = %response.user.email,
                pending_alumni = response.user.pending_alumni,
                "User registered"
            );
            ApiResponse::created(response)
        }

        Err(e) => map_register_error(e, &dto.email),
    }
}
