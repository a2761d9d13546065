//! HTTP transport: one method per server route

use reqwest::{RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize};

use crate::models::{
    book::{Book, BookInput},
    borrow::BorrowRecord,
    session::{LibrarianSignInResponse, MemberSignInResponse, Role, SignInRequest},
    staff::StaffProfile,
    user::UserProfile,
};

use super::{ClientError, ClientResult, Session};

/// Error body sent by the server
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the library API
#[derive(Clone, Debug)]
pub struct LibraryClient {
    http: reqwest::Client,
    base_url: String,
}

impl LibraryClient {
    /// `base_url` such as `http://localhost:5000`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sign in with the role-specific route and build the session
    pub async fn sign_in(&self, role: Role, email: &str, password: &str) -> ClientResult<Session> {
        let request = SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let builder = self
            .http
            .post(self.url(&format!("/signin/{}", role)))
            .json(&request);

        let (subject_id, token) = match role {
            Role::Member => {
                let response: MemberSignInResponse = send_json(builder).await?;
                (response.user_id, response.token)
            }
            Role::Librarian => {
                let response: LibrarianSignInResponse = send_json(builder).await?;
                (response.staff_id, response.token)
            }
        };

        Ok(Session {
            role,
            subject_id,
            token,
        })
    }

    pub async fn user_info(&self, session: &Session, user_id: i32) -> ClientResult<Option<UserProfile>> {
        let builder = self.http.get(self.url(&format!("/user-info/{}", user_id)));
        send_json(session.authorize(builder)).await
    }

    pub async fn staff_info(&self, session: &Session, staff_id: i32) -> ClientResult<Option<StaffProfile>> {
        let builder = self.http.get(self.url(&format!("/staff-info/{}", staff_id)));
        send_json(session.authorize(builder)).await
    }

    pub async fn borrowing_info(&self, session: &Session, user_id: i32) -> ClientResult<Vec<BorrowRecord>> {
        let builder = self.http.get(self.url(&format!("/borrowing-info/{}", user_id)));
        send_json(session.authorize(builder)).await
    }

    pub async fn search_books(&self, query: &str) -> ClientResult<Vec<Book>> {
        let builder = self
            .http
            .get(self.url("/search-books"))
            .query(&[("query", query)]);
        send_json(builder).await
    }

    pub async fn popular_books(&self) -> ClientResult<Vec<Book>> {
        send_json(self.http.get(self.url("/popular-books"))).await
    }

    pub async fn create_book(&self, session: &Session, input: &BookInput) -> ClientResult<Book> {
        let builder = self.http.post(self.url("/books")).json(input);
        send_json(session.authorize(builder)).await
    }

    pub async fn update_book(&self, session: &Session, book_id: i32, input: &BookInput) -> ClientResult<Book> {
        let builder = self
            .http
            .put(self.url(&format!("/books/{}", book_id)))
            .json(input);
        send_json(session.authorize(builder)).await
    }

    /// Returns the server's confirmation text
    pub async fn delete_book(&self, session: &Session, book_id: i32) -> ClientResult<String> {
        let builder = self.http.delete(self.url(&format!("/books/{}", book_id)));
        let response = send(session.authorize(builder)).await?;
        Ok(response.text().await?)
    }
}

async fn send(builder: RequestBuilder) -> ClientResult<Response> {
    let response = builder.send().await.map_err(|e| {
        tracing::error!("Request failed: {}", e);
        ClientError::from(e)
    })?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) => body.error,
        Err(_) if !text.is_empty() => text,
        Err(_) => status.canonical_reason().unwrap_or("Request failed").to_string(),
    };

    tracing::warn!(status = status.as_u16(), %message, "Request rejected");
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> ClientResult<T> {
    let response = send(builder).await?;
    Ok(response.json().await?)
}
