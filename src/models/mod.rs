//! Data models for Bibliodesk

pub mod author;
pub mod book;
pub mod borrow;
pub mod session;
pub mod staff;
pub mod user;

// Re-export commonly used types
pub use author::Author;
pub use book::{Book, BookInput, BookSearchQuery};
pub use borrow::BorrowRecord;
pub use session::{Role, SessionClaims, SignInRequest};
pub use staff::StaffProfile;
pub use user::{Credentials, UserProfile};
