//! Librarian (staff) model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Librarian profile as exposed by the API (password column excluded)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct StaffProfile {
    pub staff_id: i32,
    pub name: String,
    pub phone_number: Option<String>,
    pub mail: String,
}
