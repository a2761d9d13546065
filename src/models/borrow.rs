//! Borrowing record model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One line of a member's borrowing history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BorrowRecord {
    /// Title of the borrowed book
    pub title: String,
    pub reserve_date: NaiveDate,
    /// None while the book is still out
    pub return_date: Option<NaiveDate>,
    pub due: NaiveDate,
}
