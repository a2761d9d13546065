//! Author model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Author referenced by books through `books.author_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub author_id: i32,
    pub name: String,
}
