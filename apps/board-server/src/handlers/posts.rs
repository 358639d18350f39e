//! Post handlers.

use actix_web::{HttpResponse, web};

use board_core::domain::{NewPost, PostPatch};
use board_shared::MessageResponse;
use board_shared::dto::{CreatePostRequest, UpdatePostRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts - all posts, newest first.
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_all().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    match state.posts.get_by_id(&id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Err(AppError::NotFound(format!("post {id} not found"))),
    }
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    _identity: Identity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.title.trim().is_empty() || req.content.trim().is_empty() || req.author.trim().is_empty()
    {
        return Err(AppError::BadRequest(
            "title, content and author are required".to_string(),
        ));
    }

    let post = state
        .posts
        .create(NewPost {
            title: req.title,
            content: req.content,
            author: req.author,
        })
        .await?;

    Ok(HttpResponse::Created().json(post))
}

/// PUT /api/posts/{id} - partial update; omitted fields keep their value.
pub async fn update(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    let patch = PostPatch {
        title: req.title,
        content: req.content,
        author: req.author,
    };

    match state.posts.update(&id, patch).await? {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Err(AppError::NotFound(format!("post {id} not found"))),
    }
}

/// DELETE /api/posts/{id}
pub async fn delete(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    if state.posts.delete(&id).await? {
        Ok(HttpResponse::Ok().json(MessageResponse::new("post deleted")))
    } else {
        Err(AppError::NotFound(format!("post {id} not found")))
    }
}
