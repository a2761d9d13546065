//! Catalog endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookInput, BookSearchQuery},
    AppState,
};

use super::AuthenticatedUser;

pub const BOOK_DELETED_MESSAGE: &str = "Book deleted successfully";

/// Search books by title or author name
#[utoipa::path(
    get,
    path = "/search-books",
    tag = "books",
    params(BookSearchQuery),
    responses(
        (status = 200, description = "Matching books, possibly empty", body = Vec<Book>)
    )
)]
pub async fn search_books(
    State(state): State<AppState>,
    Query(query): Query<BookSearchQuery>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.search(query.query.as_deref()).await?;
    Ok(Json(books))
}

/// Ten best rated books
#[utoipa::path(
    get,
    path = "/popular-books",
    tag = "books",
    responses(
        (status = 200, description = "At most ten books by rating", body = Vec<Book>)
    )
)]
pub async fn popular_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.popular().await?;
    Ok(Json(books))
}

/// Add a book to the catalog
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    security(("bearer_auth" = [])),
    request_body = BookInput,
    responses(
        (status = 200, description = "Book created", body = Book),
        (status = 400, description = "Missing title, author or genre"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Librarian privileges required")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    WithRejection(Json(input), _): WithRejection<Json<BookInput>, AppError>,
) -> AppResult<Json<Book>> {
    claims.require_librarian()?;

    let book = state.services.catalog.create_book(&input).await?;
    Ok(Json(book))
}

/// Update a book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = BookInput,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Missing title, author or genre"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Librarian privileges required"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    WithRejection(Json(input), _): WithRejection<Json<BookInput>, AppError>,
) -> AppResult<Json<Book>> {
    claims.require_librarian()?;

    let book = state.services.catalog.update_book(id, &input).await?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted (also when already absent)", body = String, content_type = "text/plain"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Librarian privileges required")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<&'static str> {
    claims.require_librarian()?;

    state.services.catalog.delete_book(id).await?;
    Ok(BOOK_DELETED_MESSAGE)
}
