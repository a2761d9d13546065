//! Catalog management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookInput, POPULAR_BOOKS_LIMIT},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Search books by title or author substring. A missing query matches everything.
    pub async fn search(&self, query: Option<&str>) -> AppResult<Vec<Book>> {
        let query = query.map(str::trim).unwrap_or_default();
        let books = self.repository.books.search(query).await?;
        tracing::debug!(query, count = books.len(), "Book search");
        Ok(books)
    }

    /// Top rated books
    pub async fn popular(&self) -> AppResult<Vec<Book>> {
        self.repository.books.popular(POPULAR_BOOKS_LIMIT).await
    }

    pub async fn create_book(&self, input: &BookInput) -> AppResult<Book> {
        let input = input.trimmed();
        input.validate()?;

        let book = self.repository.books.create(&input).await?;
        tracing::info!(book_id = book.book_id, title = %book.title, "Book created");
        Ok(book)
    }

    pub async fn update_book(&self, book_id: i32, input: &BookInput) -> AppResult<Book> {
        let input = input.trimmed();
        input.validate()?;

        let book = self
            .repository
            .books
            .update(book_id, &input)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", book_id)))?;

        tracing::info!(book_id, "Book updated");
        Ok(book)
    }

    /// Delete a book. Deleting an unknown id is not an error.
    pub async fn delete_book(&self, book_id: i32) -> AppResult<()> {
        let deleted = self.repository.books.delete(book_id).await?;
        if deleted == 0 {
            tracing::debug!(book_id, "Delete requested for missing book");
        } else {
            tracing::info!(book_id, "Book deleted");
        }
        Ok(())
    }
}
