//! Shared fixtures for unit tests

use std::sync::Arc;

use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Algorithm, Argon2, Params, Version,
};
use axum::Router;
use chrono::Utc;
use rust_decimal::Decimal;

use crate::{
    api,
    config::AppConfig,
    models::{
        book::Book,
        session::{Role, SessionClaims},
    },
    repository::{
        books::MockBooksStore, borrows::MockBorrowsStore, health::MockHealthStore,
        staff::MockStaffStore, users::MockUsersStore, Repository,
    },
    services::Services,
    AppState,
};

/// One mock per store; set expectations, then turn into a `Repository`
pub struct MockStores {
    pub users: MockUsersStore,
    pub staff: MockStaffStore,
    pub books: MockBooksStore,
    pub borrows: MockBorrowsStore,
    pub health: MockHealthStore,
}

impl MockStores {
    pub fn new() -> Self {
        Self {
            users: MockUsersStore::new(),
            staff: MockStaffStore::new(),
            books: MockBooksStore::new(),
            borrows: MockBorrowsStore::new(),
            health: MockHealthStore::new(),
        }
    }

    pub fn into_repository(self) -> Repository {
        Repository {
            users: Arc::new(self.users),
            staff: Arc::new(self.staff),
            books: Arc::new(self.books),
            borrows: Arc::new(self.borrows),
            health: Arc::new(self.health),
        }
    }

    pub fn into_state(self) -> AppState {
        let config = AppConfig::default();
        let services = Services::new(self.into_repository(), config.auth.clone());
        AppState {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }

    pub fn into_router(self) -> Router {
        api::create_router(self.into_state())
    }
}

/// Argon2 hash with minimal cost parameters; verification reads them from the PHC string
pub fn cheap_hash(password: &str) -> String {
    let params = Params::new(1024, 1, 1, None).unwrap();
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::encode_b64(b"bibliodesk-test-salt").unwrap();
    argon2
        .hash_password(password.as_bytes(), &salt)
        .unwrap()
        .to_string()
}

/// Bearer token signed with the default test secret
pub fn bearer(role: Role, subject_id: i32) -> String {
    let now = Utc::now().timestamp();
    let claims = SessionClaims {
        sub: "test@x.com".to_string(),
        role,
        subject_id,
        exp: now + 3600,
        iat: now,
    };
    let token = claims
        .create_token(&AppConfig::default().auth.jwt_secret)
        .unwrap();
    format!("Bearer {}", token)
}

pub fn sample_book(book_id: i32, title: &str) -> Book {
    Book {
        book_id,
        title: title.to_string(),
        genre: "Fiction".to_string(),
        avg_star: Some(Decimal::new(400, 2)),
        author: "Some Author".to_string(),
        description: None,
    }
}

/// Serve the router on an ephemeral port and return its base URL
pub async fn serve(stores: MockStores) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = stores.into_router();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}
