//! Authentication handlers.

use actix_web::{HttpResponse, web};

use board_core::domain::Provider;
use board_core::ports::TokenService;
use board_shared::dto::{
    AuthResponse, LoginRequest, MeResponse, RegisterRequest, SocialLoginRequest,
};

use crate::handlers::user_response;
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.name.trim().is_empty() || req.email.trim().is_empty() || req.password.is_empty() {
        return Err(AppError::BadRequest(
            "name, email and password are required".to_string(),
        ));
    }
    if !req.email.contains('@') {
        return Err(AppError::BadRequest("invalid email address".to_string()));
    }
    if req.password.len() < 6 {
        return Err(AppError::BadRequest(
            "password must be at least 6 characters".to_string(),
        ));
    }

    let user = state
        .users
        .register(req.name, req.email, &req.password)
        .await?;

    Ok(HttpResponse::Created().json(user_response(user)))
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let session = state.auth.login(&req.email, &req.password).await?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        user: user_response(session.user),
        token: session.token,
        expires_in: state.tokens.expiry_seconds(),
    }))
}

/// POST /api/auth/social - upsert an externally-verified social identity.
///
/// The OAuth dance happens in the outer session layer; by the time a
/// request lands here the provider has already vouched for the email.
pub async fn social(
    state: web::Data<AppState>,
    body: web::Json<SocialLoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let provider = match req.provider.as_str() {
        "google" => Provider::Google,
        "github" => Provider::Github,
        other => {
            return Err(AppError::BadRequest(format!(
                "unsupported provider: {other}"
            )));
        }
    };

    let session = state
        .auth
        .social_login(req.email, req.name, provider, req.image)
        .await?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        user: user_response(session.user),
        token: session.token,
        expires_in: state.tokens.expiry_seconds(),
    }))
}

/// GET /api/auth/me - claims of the presented token.
pub async fn me(identity: Identity) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(MeResponse {
        user_id: identity.user_id,
        email: identity.email,
    }))
}
