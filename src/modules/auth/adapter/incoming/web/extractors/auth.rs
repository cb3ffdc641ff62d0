use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;

use crate::auth::application::domain::entities::User;
use crate::auth::application::domain::policy::{self, Action};
use crate::auth::application::ports::outgoing::token_provider::TokenError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Caller holding a valid token whose account still exists. The account is
/// re-read from the store on every request: the token proves identity only,
/// so approvals, rejections and deletions take effect immediately instead
/// of when a week-old token expires.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = extract_token_from_header(req);

        Box::pin(async move {
            let state = state.ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;

            let token = token.ok_or_else(|| {
                create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))
            })?;

            let claims = state.token_provider.verify_token(&token).map_err(|e| {
                let response = match e {
                    TokenError::InvalidTokenType(_) => {
                        ApiResponse::unauthorized("INVALID_TOKEN_TYPE", "Invalid token type")
                    }
                    _ => ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token"),
                };
                create_api_error(response)
            })?;

            let user = state
                .user_query
                .find_by_id(claims.sub)
                .await
                .map_err(|e| {
                    tracing::error!("User lookup failed during authentication: {}", e);
                    create_api_error(ApiResponse::internal_error())
                })?
                .ok_or_else(|| {
                    create_api_error(ApiResponse::unauthorized(
                        "UNKNOWN_USER",
                        "Account no longer exists",
                    ))
                })?;

            Ok(AuthenticatedUser { user })
        })
    }
}

/// Authenticated caller with the admin role, checked against the freshly
/// loaded account.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user: User,
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let auth_user_future = AuthenticatedUser::from_request(req, payload);

        Box::pin(async move {
            let auth_user = auth_user_future.await?;

            if !auth_user.user.is_admin() {
                return Err(create_api_error(ApiResponse::forbidden(
                    "ADMIN_ONLY",
                    "Access denied. Admins only.",
                )));
            }

            Ok(AdminUser {
                user: auth_user.user,
            })
        })
    }
}

/// Authenticated caller allowed to post jobs. Admins pass the same gate;
/// their postings go up pre-verified.
#[derive(Debug, Clone)]
pub struct VerifiedAlumni {
    pub user: User,
}

impl FromRequest for VerifiedAlumni {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let auth_user_future = AuthenticatedUser::from_request(req, payload);

        Box::pin(async move {
            let auth_user = auth_user_future.await?;

            if !policy::allows(&auth_user.user, Action::CreateJob) {
                return Err(create_api_error(ApiResponse::forbidden(
                    "ALUMNI_ONLY",
                    "Access denied. Verified alumni only.",
                )));
            }

            Ok(VerifiedAlumni {
                user: auth_user.user,
            })
        })
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
