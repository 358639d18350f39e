//! Authentication flow: credential login, social sign-in and token
//! verification, built on the user repository.
//!
//! The two login paths are independent; no shared session state lives here.
//! Social identities arrive already verified by the external provider, so
//! the only trust decision made locally is the password check.

use std::sync::Arc;

use crate::domain::{Provider, User};
use crate::error::DomainError;
use crate::ports::{AuthError, PasswordService, TokenClaims, TokenService};
use crate::repo::UserRepository;

/// Result of a successful login: the identity (password stripped) plus a
/// bearer token for subsequent requests.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

#[derive(Clone)]
pub struct AuthFlow {
    users: UserRepository,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenService>,
}

impl AuthFlow {
    pub fn new(
        users: UserRepository,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            passwords,
            tokens,
        }
    }

    /// Credential login. Fails with `AuthFailed` for an unknown email, a
    /// social-only account (no stored password), or a hash mismatch -
    /// indistinguishable from the outside.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, DomainError> {
        let Some(user) = self.users.get_by_email(email).await? else {
            return Err(DomainError::AuthFailed);
        };

        let Some(hash) = user.password.as_deref() else {
            tracing::debug!(%email, "login attempt against social-only account");
            return Err(DomainError::AuthFailed);
        };

        let valid = self
            .passwords
            .verify(password, hash)
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        if !valid {
            return Err(DomainError::AuthFailed);
        }

        let token = self
            .tokens
            .issue(&user.id, &user.email)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(AuthSession {
            user: user.stripped(),
            token,
        })
    }

    /// Social login for an identity the external provider has already
    /// verified. Upserts the account and issues a token; no password check.
    pub async fn social_login(
        &self,
        email: String,
        name: String,
        provider: Provider,
        image: Option<String>,
    ) -> Result<AuthSession, DomainError> {
        let user = self
            .users
            .upsert_social_user(email, name, provider, image)
            .await?;

        let token = self
            .tokens
            .issue(&user.id, &user.email)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(AuthSession {
            user: user.stripped(),
            token,
        })
    }

    /// Verify a bearer token and return its claims.
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
        self.tokens.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::testing::{MemoryUserStore, PlainPasswordService};

    /// Stub token service: encodes the identity in the token string.
    struct StubTokenService;

    impl TokenService for StubTokenService {
        fn issue(&self, user_id: &str, email: &str) -> Result<String, AuthError> {
            Ok(format!("tok:{user_id}:{email}"))
        }

        fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
            let mut parts = token.splitn(3, ':');
            match (parts.next(), parts.next(), parts.next()) {
                (Some("tok"), Some(id), Some(email)) => Ok(TokenClaims {
                    user_id: id.to_string(),
                    email: email.to_string(),
                    exp: 0,
                }),
                _ => Err(AuthError::InvalidToken("malformed".to_string())),
            }
        }

        fn expiry_seconds(&self) -> i64 {
            86_400
        }
    }

    fn flow() -> AuthFlow {
        let passwords: Arc<dyn PasswordService> = Arc::new(PlainPasswordService);
        let users = UserRepository::new(Arc::new(MemoryUserStore::default()), passwords.clone());
        AuthFlow::new(users, passwords, Arc::new(StubTokenService))
    }

    #[tokio::test]
    async fn login_succeeds_with_correct_credentials() {
        let flow = flow();
        let registered = flow
            .users
            .register("Alice".to_string(), "a@x.com".to_string(), "secret99")
            .await
            .unwrap();

        let session = flow.login("a@x.com", "secret99").await.unwrap();
        assert_eq!(session.user.id, registered.id);
        assert!(session.user.password.is_none());

        let claims = flow.verify_token(&session.token).unwrap();
        assert_eq!(claims.user_id, registered.id);
        assert_eq!(claims.email, "a@x.com");
    }

    #[tokio::test]
    async fn login_fails_for_wrong_password_and_unknown_email() {
        let flow = flow();
        flow.users
            .register("Alice".to_string(), "a@x.com".to_string(), "secret99")
            .await
            .unwrap();

        assert!(matches!(
            flow.login("a@x.com", "wrong").await.unwrap_err(),
            DomainError::AuthFailed
        ));
        assert!(matches!(
            flow.login("nobody@x.com", "secret99").await.unwrap_err(),
            DomainError::AuthFailed
        ));
    }

    #[tokio::test]
    async fn login_fails_for_social_only_account() {
        let flow = flow();
        flow.users
            .upsert_social_user(
                "g@x.com".to_string(),
                "Gina".to_string(),
                Provider::Google,
                None,
            )
            .await
            .unwrap();

        assert!(matches!(
            flow.login("g@x.com", "anything").await.unwrap_err(),
            DomainError::AuthFailed
        ));
    }

    #[tokio::test]
    async fn social_login_issues_a_token_for_the_upserted_user() {
        let flow = flow();
        let session = flow
            .social_login(
                "g@x.com".to_string(),
                "Gina".to_string(),
                Provider::Github,
                Some("http://img".to_string()),
            )
            .await
            .unwrap();

        let claims = flow.verify_token(&session.token).unwrap();
        assert_eq!(claims.user_id, session.user.id);

        // Sanity check on the stub hashing used above.
        assert!(PlainPasswordService.verify("x", "hashed:x").unwrap());
    }
}
