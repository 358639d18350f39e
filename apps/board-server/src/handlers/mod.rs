//! HTTP handlers and route configuration.
//!
//! This layer only translates between HTTP and the repositories/auth flow;
//! all business rules live in `board-core`.

mod auth;
mod health;
mod posts;
mod users;

use actix_web::web;

use board_core::domain::User;
use board_shared::dto::UserResponse;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Post routes
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list))
                    .route("", web::post().to(posts::create))
                    .route("/{id}", web::get().to(posts::get))
                    .route("/{id}", web::put().to(posts::update))
                    .route("/{id}", web::delete().to(posts::delete)),
            )
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/social", web::post().to(auth::social))
                    .route("/me", web::get().to(auth::me)),
            )
            // User routes
            .service(
                web::scope("/users")
                    .route("", web::get().to(users::list))
                    .route("/{id}", web::get().to(users::get)),
            ),
    );
}

/// User records leave this layer with the password always stripped; the
/// DTO has no field to put a hash in.
pub(crate) fn user_response(user: User) -> UserResponse {
    UserResponse {
        id: user.id,
        name: user.name,
        email: user.email,
        image: user.image,
        provider: user.provider.to_string(),
        created_at: user.created_at.to_rfc3339(),
        updated_at: user.updated_at.to_rfc3339(),
    }
}
