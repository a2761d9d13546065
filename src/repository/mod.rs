//! Repository layer for database operations
//!
//! Each store is a trait so services can be exercised against mocks; the
//! PostgreSQL implementations live next to their trait.

pub mod books;
pub mod borrows;
pub mod health;
pub mod staff;
pub mod users;

use std::sync::Arc;

use sqlx::{Pool, Postgres};

pub use books::BooksStore;
pub use borrows::BorrowsStore;
pub use health::HealthStore;
pub use staff::StaffStore;
pub use users::UsersStore;

/// Main repository struct holding one store per table group
#[derive(Clone)]
pub struct Repository {
    pub users: Arc<dyn UsersStore>,
    pub staff: Arc<dyn StaffStore>,
    pub books: Arc<dyn BooksStore>,
    pub borrows: Arc<dyn BorrowsStore>,
    pub health: Arc<dyn HealthStore>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            users: Arc::new(users::UsersRepository::new(pool.clone())),
            staff: Arc::new(staff::StaffRepository::new(pool.clone())),
            books: Arc::new(books::BooksRepository::new(pool.clone())),
            borrows: Arc::new(borrows::BorrowsRepository::new(pool.clone())),
            health: Arc::new(health::HealthRepository::new(pool)),
        }
    }
}
