//! Authentication adapters.

mod jwt;
mod password;

pub use jwt::{JwtConfig, JwtTokenService};
pub use password::Argon2PasswordService;

#[cfg(test)]
mod tests {
    //! Credential login against a freshly seeded store, with the real
    //! hashing and token implementations end to end.

    use std::sync::Arc;

    use board_core::DomainError;
    use board_core::auth::AuthFlow;
    use board_core::ports::{PasswordService, TokenService};
    use board_core::repo::UserRepository;

    use crate::auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
    use crate::store::{json_file, seed};

    async fn seeded_flow(dir: &std::path::Path) -> AuthFlow {
        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());
        let (_, users) = json_file::init(dir, passwords.as_ref()).await.unwrap();

        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(JwtConfig {
            secret: "test-secret".to_string(),
            expiration_hours: 24,
        }));

        let repo = UserRepository::new(Arc::new(users), passwords.clone());
        AuthFlow::new(repo, passwords, tokens)
    }

    #[tokio::test]
    async fn seeded_admin_can_login_and_token_maps_back() {
        let dir = tempfile::tempdir().unwrap();
        let flow = seeded_flow(dir.path()).await;

        let session = flow
            .login(seed::ADMIN_EMAIL, seed::ADMIN_PASSWORD)
            .await
            .unwrap();

        assert_eq!(session.user.email, seed::ADMIN_EMAIL);
        assert!(session.user.password.is_none());

        let claims = flow.verify_token(&session.token).unwrap();
        assert_eq!(claims.user_id, session.user.id);
        assert_eq!(claims.email, seed::ADMIN_EMAIL);
    }

    #[tokio::test]
    async fn seeded_admin_login_fails_with_wrong_password() {
        let dir = tempfile::tempdir().unwrap();
        let flow = seeded_flow(dir.path()).await;

        let err = flow.login(seed::ADMIN_EMAIL, "nope").await.unwrap_err();
        assert!(matches!(err, DomainError::AuthFailed));
    }
}
