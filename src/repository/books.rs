//! Books repository for database operations

use async_trait::async_trait;
use sqlx::{PgConnection, Pool, Postgres};

use crate::{
    error::AppResult,
    models::{
        author::Author,
        book::{Book, BookInput},
    },
};

const BOOK_SELECT: &str = r#"
    SELECT b.book_id, b.title, b.genre, b.avg_star, a.name AS author, b.description
    FROM books b
    JOIN authors a ON b.author_id = a.author_id
"#;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BooksStore: Send + Sync {
    /// Case-insensitive substring match on title or author name
    async fn search(&self, query: &str) -> AppResult<Vec<Book>>;

    /// Best rated books first, unrated last
    async fn popular(&self, limit: i64) -> AppResult<Vec<Book>>;

    async fn create(&self, input: &BookInput) -> AppResult<Book>;

    /// Returns None when no book has this id
    async fn update(&self, book_id: i32, input: &BookInput) -> AppResult<Option<Book>>;

    /// Returns the number of deleted rows (0 or 1)
    async fn delete(&self, book_id: i32) -> AppResult<u64>;
}

/// Build an ILIKE pattern matching `query` anywhere, with wildcards escaped
pub fn contains_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Find the author by name (case-insensitive) or insert it
    async fn resolve_author(conn: &mut PgConnection, name: &str) -> AppResult<Author> {
        let author = sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO authors (name) VALUES ($1)
            ON CONFLICT ((LOWER(name))) DO UPDATE SET name = authors.name
            RETURNING author_id, name
            "#,
        )
        .bind(name)
        .fetch_one(conn)
        .await?;

        Ok(author)
    }

    async fn fetch_book(conn: &mut PgConnection, book_id: i32) -> AppResult<Book> {
        let book = sqlx::query_as::<_, Book>(&format!("{} WHERE b.book_id = $1", BOOK_SELECT))
            .bind(book_id)
            .fetch_one(conn)
            .await?;

        Ok(book)
    }
}

#[async_trait]
impl BooksStore for BooksRepository {
    async fn search(&self, query: &str) -> AppResult<Vec<Book>> {
        let sql = format!(
            "{} WHERE b.title ILIKE $1 OR a.name ILIKE $1 ORDER BY b.book_id",
            BOOK_SELECT
        );

        let books = sqlx::query_as::<_, Book>(&sql)
            .bind(contains_pattern(query))
            .fetch_all(&self.pool)
            .await?;

        Ok(books)
    }

    async fn popular(&self, limit: i64) -> AppResult<Vec<Book>> {
        let sql = format!(
            "{} ORDER BY b.avg_star DESC NULLS LAST, b.book_id LIMIT $1",
            BOOK_SELECT
        );

        let books = sqlx::query_as::<_, Book>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(books)
    }

    async fn create(&self, input: &BookInput) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let author = Self::resolve_author(&mut *tx, &input.author).await?;

        let book_id: i32 = sqlx::query_scalar(
            "INSERT INTO books (title, author_id, genre) VALUES ($1, $2, $3) RETURNING book_id",
        )
        .bind(&input.title)
        .bind(author.author_id)
        .bind(&input.genre)
        .fetch_one(&mut *tx)
        .await?;

        let book = Self::fetch_book(&mut *tx, book_id).await?;
        tx.commit().await?;

        Ok(book)
    }

    async fn update(&self, book_id: i32, input: &BookInput) -> AppResult<Option<Book>> {
        let mut tx = self.pool.begin().await?;

        let author = Self::resolve_author(&mut *tx, &input.author).await?;

        // title, author, genre, id: exactly four bound values
        let updated: Option<i32> = sqlx::query_scalar(
            "UPDATE books SET title = $1, author_id = $2, genre = $3 WHERE book_id = $4 RETURNING book_id",
        )
        .bind(&input.title)
        .bind(author.author_id)
        .bind(&input.genre)
        .bind(book_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(book_id) = updated else {
            // The author upsert is rolled back with the transaction
            return Ok(None);
        };

        let book = Self::fetch_book(&mut *tx, book_id).await?;
        tx.commit().await?;

        Ok(Some(book))
    }

    async fn delete(&self, book_id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM books WHERE book_id = $1")
            .bind(book_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
