//! Book (catalog entry) model and related types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Number of rows returned by the popular books list
pub const POPULAR_BOOKS_LIMIT: i64 = 10;

/// Book joined with its author's name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub book_id: i32,
    pub title: String,
    pub genre: String,
    /// Average rating, serialized as a decimal string (e.g. "4.50")
    #[schema(value_type = Option<String>)]
    pub avg_star: Option<Decimal>,
    /// Author name
    pub author: String,
    pub description: Option<String>,
}

/// Create or update book request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct BookInput {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Author name; resolved to an existing author or created
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    #[validate(length(min = 1, message = "Genre is required"))]
    pub genre: String,
}

impl BookInput {
    /// Same input with surrounding whitespace removed
    pub fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            genre: self.genre.trim().to_string(),
        }
    }
}

/// Search query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct BookSearchQuery {
    /// Substring matched against title or author name (case-insensitive)
    pub query: Option<String>,
}
