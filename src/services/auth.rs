//! Sign-in for members and librarians

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::{
        session::{Role, SessionClaims},
        user::Credentials,
    },
    repository::Repository,
};

/// Outcome of a successful sign-in
#[derive(Debug, Clone)]
pub struct SignedIn {
    /// `user_id` or `staff_id` depending on the role
    pub subject_id: i32,
    pub token: String,
}

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Check credentials against the member or staff table and mint a token
    pub async fn sign_in(&self, role: Role, email: &str, password: &str) -> AppResult<SignedIn> {
        let (credentials, not_found) = match role {
            Role::Member => (
                self.repository.users.get_credentials_by_email(email).await?,
                "User not found.",
            ),
            Role::Librarian => (
                self.repository.staff.get_credentials_by_email(email).await?,
                "Staff not found.",
            ),
        };

        let credentials = credentials.ok_or_else(|| {
            tracing::info!(%role, "Sign-in rejected: unknown email");
            AppError::NotFound(not_found.to_string())
        })?;

        if !verify_password(&credentials.password_hash, password)? {
            tracing::info!(%role, subject_id = credentials.id, "Sign-in rejected: wrong password");
            return Err(AppError::Authentication("Invalid password.".to_string()));
        }

        let token = self.create_token(role, &credentials)?;
        tracing::info!(%role, subject_id = credentials.id, "Sign-in successful");

        Ok(SignedIn {
            subject_id: credentials.id,
            token,
        })
    }

    fn create_token(&self, role: Role, credentials: &Credentials) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let exp = now + (self.config.jwt_expiration_hours as i64 * 3600);

        let claims = SessionClaims {
            sub: credentials.email.clone(),
            role,
            subject_id: credentials.id,
            exp,
            iat: now,
        };

        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }
}

/// Verify a password against an argon2 PHC string.
/// The digest comparison inside argon2 is constant-time.
pub fn verify_password(hash: &str, password: &str) -> AppResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Hash a password using Argon2, for account provisioning
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{cheap_hash, MockStores};
    use tokio_test::assert_ok;

    fn service(stores: MockStores) -> AuthService {
        AuthService::new(stores.into_repository(), AuthConfig::default())
    }

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("pw").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password(&hash, "pw").unwrap());
        assert!(!verify_password(&hash, "PW").unwrap());
    }

    #[test]
    fn test_plain_text_hash_is_rejected() {
        assert!(verify_password("pw", "pw").is_err());
    }

    #[tokio::test]
    async fn test_member_sign_in_returns_user_id_and_token() {
        let mut stores = MockStores::new();
        let hash = cheap_hash("pw");
        stores
            .users
            .expect_get_credentials_by_email()
            .times(1)
            .returning(move |email| {
                Ok(Some(Credentials {
                    id: 1,
                    email: email.to_string(),
                    password_hash: hash.clone(),
                }))
            });

        let signed_in = assert_ok!(service(stores).sign_in(Role::Member, "a@x.com", "pw").await);
        assert_eq!(signed_in.subject_id, 1);

        let claims =
            SessionClaims::from_token(&signed_in.token, &AuthConfig::default().jwt_secret).unwrap();
        assert_eq!(claims.role, Role::Member);
        assert_eq!(claims.subject_id, 1);
        assert_eq!(claims.sub, "a@x.com");
    }

    #[tokio::test]
    async fn test_unknown_email_is_not_found() {
        let mut stores = MockStores::new();
        stores
            .users
            .expect_get_credentials_by_email()
            .returning(|_| Ok(None));

        let err = service(stores)
            .sign_in(Role::Member, "nobody@x.com", "pw")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "User not found."));
    }

    #[tokio::test]
    async fn test_wrong_password_is_unauthorized() {
        let mut stores = MockStores::new();
        let hash = cheap_hash("secret");
        stores
            .staff
            .expect_get_credentials_by_email()
            .returning(move |email| {
                Ok(Some(Credentials {
                    id: 3,
                    email: email.to_string(),
                    password_hash: hash.clone(),
                }))
            });

        let err = service(stores)
            .sign_in(Role::Librarian, "lib@x.com", "guess")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Authentication(ref msg) if msg == "Invalid password."));
    }

    #[tokio::test]
    async fn test_librarian_lookup_uses_staff_table() {
        let mut stores = MockStores::new();
        stores.users.expect_get_credentials_by_email().never();
        stores
            .staff
            .expect_get_credentials_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let err = service(stores)
            .sign_in(Role::Librarian, "lib@x.com", "pw")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Staff not found."));
    }
}
