//! Welcome, sign-in and home screens as plain state

use crate::models::{
    book::{Book, BookInput},
    borrow::BorrowRecord,
    session::Role,
    staff::StaffProfile,
    user::UserProfile,
};

use super::{ClientError, ClientResult, LibraryClient, Session, SessionStore};

/// Rows kept from a librarian search
pub const SEARCH_DISPLAY_LIMIT: usize = 5;

/// Screen currently shown
#[derive(Debug)]
pub enum View {
    Welcome,
    SignIn(Role),
    MemberHome(MemberHome),
    LibrarianHome(LibrarianHome),
}

impl View {
    pub fn session(&self) -> Option<&Session> {
        match self {
            View::MemberHome(home) => Some(home.session()),
            View::LibrarianHome(home) => Some(home.session()),
            View::Welcome | View::SignIn(_) => None,
        }
    }
}

/// Front-end state machine: welcome, sign-in, role home, sign-out
pub struct ClientApp<S: SessionStore> {
    client: LibraryClient,
    store: S,
    view: View,
    last_error: Option<String>,
}

impl<S: SessionStore> ClientApp<S> {
    pub fn new(client: LibraryClient, store: S) -> Self {
        Self {
            client,
            store,
            view: View::Welcome,
            last_error: None,
        }
    }

    /// Resume a stored session straight into its home view
    pub async fn restore(client: LibraryClient, store: S) -> ClientResult<Self> {
        let mut app = Self::new(client, store);
        if let Some(session) = app.store.load()? {
            tracing::debug!(role = %session.role, "Restoring stored session");
            app.enter_home(session).await;
        }
        Ok(app)
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    pub fn session(&self) -> Option<&Session> {
        self.view.session()
    }

    /// Message of the last failed sign-in or home load
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn choose_role(&mut self, role: Role) {
        if matches!(self.view, View::Welcome | View::SignIn(_)) {
            self.last_error = None;
            self.view = View::SignIn(role);
        }
    }

    /// Leave the sign-in form
    pub fn back(&mut self) {
        if matches!(self.view, View::SignIn(_)) {
            self.view = View::Welcome;
        }
    }

    /// Submit credentials for the role chosen on the welcome screen.
    /// On failure the sign-in view stays and `last_error` holds the message.
    pub async fn sign_in(&mut self, email: &str, password: &str) -> ClientResult<()> {
        let View::SignIn(role) = self.view else {
            return Err(ClientError::InvalidView("sign-in requires the sign-in view"));
        };

        let session = match self.client.sign_in(role, email, password).await {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(%role, "Sign-in failed: {}", e);
                self.last_error = Some(e.to_string());
                return Err(e);
            }
        };

        self.store.save(&session)?;
        self.last_error = None;
        self.enter_home(session).await;
        Ok(())
    }

    /// Forget the session and go back to the welcome screen
    pub fn sign_out(&mut self) -> ClientResult<()> {
        self.store.clear()?;
        self.last_error = None;
        self.view = View::Welcome;
        Ok(())
    }

    async fn enter_home(&mut self, session: Session) {
        let client = self.client.clone();
        let loaded = match session.role {
            Role::Member => {
                let mut home = MemberHome::new(client, session);
                let loaded = home.refresh().await;
                self.view = View::MemberHome(home);
                loaded
            }
            Role::Librarian => {
                let mut home = LibrarianHome::new(client, session);
                let loaded = home.refresh().await;
                self.view = View::LibrarianHome(home);
                loaded
            }
        };

        // The home view is shown even when its first load fails
        if let Err(e) = loaded {
            tracing::warn!("Home view load failed: {}", e);
            self.last_error = Some(e.to_string());
        }
    }
}

/// Member home: popular books, search, profile and borrowing history
#[derive(Debug)]
pub struct MemberHome {
    client: LibraryClient,
    session: Session,
    popular: Vec<Book>,
    search_results: Vec<Book>,
    selected: Option<Book>,
}

impl MemberHome {
    pub fn new(client: LibraryClient, session: Session) -> Self {
        Self {
            client,
            session,
            popular: Vec::new(),
            search_results: Vec::new(),
            selected: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Reload the top rated list
    pub async fn refresh(&mut self) -> ClientResult<()> {
        self.popular = self.client.popular_books().await?;
        Ok(())
    }

    pub fn popular(&self) -> &[Book] {
        &self.popular
    }

    /// Search results while there are any, otherwise the popular list
    pub fn displayed(&self) -> &[Book] {
        if self.search_results.is_empty() {
            &self.popular
        } else {
            &self.search_results
        }
    }

    pub async fn search(&mut self, query: &str) -> ClientResult<&[Book]> {
        self.search_results = self.client.search_books(query).await?;
        Ok(&self.search_results)
    }

    pub fn clear_search(&mut self) {
        self.search_results.clear();
    }

    pub async fn profile(&self) -> ClientResult<Option<UserProfile>> {
        self.client.user_info(&self.session, self.session.subject_id).await
    }

    pub async fn borrowing_history(&self) -> ClientResult<Vec<BorrowRecord>> {
        self.client
            .borrowing_info(&self.session, self.session.subject_id)
            .await
    }

    /// Open the detail of a displayed book; no request is made
    pub fn select_book(&mut self, book_id: i32) -> Option<&Book> {
        self.selected = self
            .displayed()
            .iter()
            .find(|book| book.book_id == book_id)
            .cloned();
        self.selected.as_ref()
    }

    pub fn selected(&self) -> Option<&Book> {
        self.selected.as_ref()
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }
}

/// Librarian home: inventory, own profile and catalog management
#[derive(Debug)]
pub struct LibrarianHome {
    client: LibraryClient,
    session: Session,
    inventory: Vec<Book>,
    staff: Option<StaffProfile>,
    search_results: Vec<Book>,
    last_query: Option<String>,
}

impl LibrarianHome {
    pub fn new(client: LibraryClient, session: Session) -> Self {
        Self {
            client,
            session,
            inventory: Vec::new(),
            staff: None,
            search_results: Vec::new(),
            last_query: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Reload the inventory (top rated list) and the staff profile
    pub async fn refresh(&mut self) -> ClientResult<()> {
        self.inventory = self.client.popular_books().await?;
        self.staff = self
            .client
            .staff_info(&self.session, self.session.subject_id)
            .await?;
        Ok(())
    }

    pub fn inventory(&self) -> &[Book] {
        &self.inventory
    }

    pub fn staff(&self) -> Option<&StaffProfile> {
        self.staff.as_ref()
    }

    pub fn search_results(&self) -> &[Book] {
        &self.search_results
    }

    /// Search and keep the first rows only
    pub async fn search(&mut self, query: &str) -> ClientResult<&[Book]> {
        let mut books = self.client.search_books(query).await?;
        books.truncate(SEARCH_DISPLAY_LIMIT);
        self.search_results = books;
        self.last_query = Some(query.to_string());
        Ok(&self.search_results)
    }

    pub async fn add_book(&mut self, input: &BookInput) -> ClientResult<Book> {
        let book = self.client.create_book(&self.session, input).await?;
        self.inventory.push(book.clone());
        Ok(book)
    }

    /// Update on the server, then swap the returned row into the local lists
    pub async fn update_book(&mut self, book_id: i32, input: &BookInput) -> ClientResult<Book> {
        let book = self.client.update_book(&self.session, book_id, input).await?;
        for row in self
            .inventory
            .iter_mut()
            .chain(self.search_results.iter_mut())
            .filter(|row| row.book_id == book.book_id)
        {
            *row = book.clone();
        }
        Ok(book)
    }

    /// Delete on the server, drop it locally and re-run the last search
    pub async fn delete_book(&mut self, book_id: i32) -> ClientResult<()> {
        self.client.delete_book(&self.session, book_id).await?;
        self.inventory.retain(|book| book.book_id != book_id);
        self.search_results.retain(|book| book.book_id != book_id);

        if let Some(query) = self.last_query.clone() {
            self.search(&query).await?;
        }
        Ok(())
    }
}
