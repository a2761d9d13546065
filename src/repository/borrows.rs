//! Borrowing records repository (read-only)

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::borrow::BorrowRecord};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BorrowsStore: Send + Sync {
    /// Borrowing history of a member, oldest reservation first
    async fn history(&self, user_id: i32) -> AppResult<Vec<BorrowRecord>>;
}

#[derive(Clone)]
pub struct BorrowsRepository {
    pool: Pool<Postgres>,
}

impl BorrowsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BorrowsStore for BorrowsRepository {
    async fn history(&self, user_id: i32) -> AppResult<Vec<BorrowRecord>> {
        let records = sqlx::query_as::<_, BorrowRecord>(
            r#"
            SELECT b.title, r.reserve_date, r.return_date, r.due
            FROM re r
            JOIN books b ON r.book_id = b.book_id
            WHERE r.user_id = $1
            ORDER BY r.reserve_date, r.re_id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
