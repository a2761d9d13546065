//! Roles, sign-in payloads and signed session claims

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::AppError;

/// Who signed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Member,
    Librarian,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Librarian => "librarian",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sign-in request body (both roles)
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SignInRequest {
    /// Matched case-insensitively against stored logins; no format check
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Successful member sign-in
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MemberSignInResponse {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: i32,
    /// Bearer token for the protected routes
    pub token: String,
}

/// Successful librarian sign-in
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LibrarianSignInResponse {
    pub message: String,
    #[serde(rename = "staffId")]
    pub staff_id: i32,
    /// Bearer token for the protected routes
    pub token: String,
}

pub const SIGN_IN_MESSAGE: &str = "Sign-in successful.";

/// JWT claims minted at sign-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Email used to sign in
    pub sub: String,
    pub role: Role,
    /// `user_id` for members, `staff_id` for librarians
    pub subject_id: i32,
    pub exp: i64,
    pub iat: i64,
}

impl SessionClaims {
    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse and validate a JWT token (signature and expiry)
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }

    pub fn is_librarian(&self) -> bool {
        self.role == Role::Librarian
    }

    /// Catalog mutations
    pub fn require_librarian(&self) -> Result<(), AppError> {
        if self.is_librarian() {
            Ok(())
        } else {
            Err(AppError::Authorization("Librarian privileges required".to_string()))
        }
    }

    /// Member data: the member themself or any librarian
    pub fn require_member_access(&self, user_id: i32) -> Result<(), AppError> {
        match self.role {
            Role::Librarian => Ok(()),
            Role::Member if self.subject_id == user_id => Ok(()),
            Role::Member => Err(AppError::Authorization(
                "Cannot access another member's records".to_string(),
            )),
        }
    }

    /// Staff data: only the librarian themself
    pub fn require_staff_self(&self, staff_id: i32) -> Result<(), AppError> {
        if self.is_librarian() && self.subject_id == staff_id {
            Ok(())
        } else {
            Err(AppError::Authorization(
                "Cannot access another staff member's records".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn claims(role: Role, subject_id: i32) -> SessionClaims {
        let now = Utc::now().timestamp();
        SessionClaims {
            sub: "a@x.com".to_string(),
            role,
            subject_id,
            exp: now + 3600,
            iat: now,
        }
    }

    #[test]
    fn test_token_round_trip() {
        let original = claims(Role::Librarian, 4);
        let token = original.create_token("secret").unwrap();
        let parsed = SessionClaims::from_token(&token, "secret").unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_token_rejects_wrong_secret() {
        let token = claims(Role::Member, 1).create_token("secret").unwrap();
        assert!(SessionClaims::from_token(&token, "other").is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let mut expired = claims(Role::Member, 1);
        expired.iat -= 7200;
        expired.exp = expired.iat + 60;
        let token = expired.create_token("secret").unwrap();
        assert!(SessionClaims::from_token(&token, "secret").is_err());
    }

    #[test]
    fn test_member_access_rules() {
        let member = claims(Role::Member, 1);
        assert!(member.require_member_access(1).is_ok());
        assert!(member.require_member_access(2).is_err());
        assert!(member.require_librarian().is_err());
        assert!(member.require_staff_self(1).is_err());

        let librarian = claims(Role::Librarian, 9);
        assert!(librarian.require_member_access(1).is_ok());
        assert!(librarian.require_librarian().is_ok());
        assert!(librarian.require_staff_self(9).is_ok());
        assert!(librarian.require_staff_self(8).is_err());
    }

    #[test]
    fn test_role_wire_names() {
        assert_eq!(Role::Librarian.to_string(), "librarian");
        assert_eq!(serde_json::to_value(Role::Member).unwrap(), "member");
    }

    #[test]
    fn test_sign_in_accepts_plain_login() {
        let request = SignInRequest {
            email: "admin".to_string(),
            password: "pw".to_string(),
        };
        assert!(request.validate().is_ok());

        let empty = SignInRequest {
            email: String::new(),
            password: "pw".to_string(),
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_sign_in_response_field_names() {
        let response = MemberSignInResponse {
            message: SIGN_IN_MESSAGE.to_string(),
            user_id: 1,
            token: "t".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["userId"], 1);
        assert_eq!(value["message"], "Sign-in successful.");
    }
}
