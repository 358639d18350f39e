//! Authentication ports.

/// Claims embedded in a bearer token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: String,
    pub email: String,
    pub exp: i64,
}

/// Signed, time-limited token issuance and verification.
pub trait TokenService: Send + Sync {
    /// Issue a token for the given identity.
    fn issue(&self, user_id: &str, email: &str) -> Result<String, AuthError>;

    /// Verify signature and expiry, returning the embedded claims.
    fn verify(&self, token: &str) -> Result<TokenClaims, AuthError>;

    /// Token lifetime in seconds, for clients that want to know.
    fn expiry_seconds(&self) -> i64;
}

/// One-way salted password hashing.
pub trait PasswordService: Send + Sync {
    /// Hash a plaintext password with a per-call random salt.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a plaintext password against a stored hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("token expired")]
    TokenExpired,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("missing authorization header")]
    MissingAuth,

    #[error("hashing error: {0}")]
    Hashing(String),
}
