use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity source for a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Local credential account (email + password).
    Email,
    Google,
    Github,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Email => "email",
            Provider::Google => "google",
            Provider::Github => "github",
        }
    }

    /// Parse a stored provider tag. Unknown tags fall back to `Email`.
    pub fn parse(s: &str) -> Self {
        match s {
            "google" => Provider::Google,
            "github" => Provider::Github,
            _ => Provider::Email,
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User entity.
///
/// `password` holds the one-way hash, never the plaintext, and is present
/// only for credential-based accounts. It is skipped during serialization
/// when absent and must be stripped before a record leaves the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub provider: Provider,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a credential-based user with a freshly generated id.
    pub fn new_credential(name: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            password: Some(password_hash),
            image: None,
            provider: Provider::Email,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a social-identity user. No password is ever stored for these.
    pub fn new_social(name: String, email: String, provider: Provider, image: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            password: None,
            image,
            provider,
            created_at: now,
            updated_at: now,
        }
    }

    /// Return a copy with the password hash removed.
    pub fn stripped(mut self) -> Self {
        self.password = None;
        self
    }
}
