//! Typed client for the Bibliodesk API
//!
//! `LibraryClient` maps one method to each route. `ClientApp` drives the
//! member and librarian screens: role selection, sign-in, the two home
//! views and sign-out. The signed-in [`Session`] is an explicit value,
//! persisted through a [`SessionStore`] and handed to the home views.

mod http;
mod session;
mod views;

use thiserror::Error;

pub use http::LibraryClient;
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionStore};
pub use views::{ClientApp, LibrarianHome, MemberHome, View, SEARCH_DISPLAY_LIMIT};

/// Message shown when the server cannot be reached
pub const TRANSPORT_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

#[derive(Error, Debug)]
pub enum ClientError {
    /// Non-success status, with the server's `error` text when it sent one
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("{}", TRANSPORT_ERROR_MESSAGE)]
    Transport(#[from] reqwest::Error),

    #[error("Not available from the current view: {0}")]
    InvalidView(&'static str),

    #[error("Session store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt session data: {0}")]
    Corrupt(#[from] serde_json::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
