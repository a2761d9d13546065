//! Member (user) model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Member profile as exposed by the API (password column excluded)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserProfile {
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub birth_year: Option<i32>,
    pub address: Option<String>,
}

/// Stored credentials of a member or a librarian, used only by sign-in
#[derive(Debug, Clone, FromRow)]
pub struct Credentials {
    pub id: i32,
    pub email: String,
    /// Argon2 PHC string
    pub password_hash: String,
}
