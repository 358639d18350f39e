//! User handlers. Records always leave with the password stripped.

use actix_web::{HttpResponse, web};

use crate::handlers::user_response;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/users
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.list_all().await?;
    let users: Vec<_> = users.into_iter().map(user_response).collect();
    Ok(HttpResponse::Ok().json(users))
}

/// GET /api/users/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    match state.users.get_by_id(&id).await? {
        Some(user) => Ok(HttpResponse::Ok().json(user_response(user))),
        None => Err(AppError::NotFound(format!("user {id} not found"))),
    }
}
