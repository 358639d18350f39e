//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to create a post. All fields are required non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Partial update for a post; omitted fields keep their prior value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

/// Request to register a credential-based account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request to login with credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// An externally-verified social identity. The OAuth handshake itself
/// happens outside this service; by the time this arrives the provider has
/// vouched for the email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLoginRequest {
    pub email: String,
    pub name: String,
    /// "google" or "github".
    pub provider: String,
    pub image: Option<String>,
}

/// A user's public information - never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub provider: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Successful login: identity plus bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

/// Claims of the presented token, as returned by `GET /api/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub user_id: String,
    pub email: String,
}
