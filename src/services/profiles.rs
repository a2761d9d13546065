//! Member and librarian profile lookups, borrowing history

use crate::{
    error::AppResult,
    models::{borrow::BorrowRecord, staff::StaffProfile, user::UserProfile},
    repository::Repository,
};

#[derive(Clone)]
pub struct ProfileService {
    repository: Repository,
}

impl ProfileService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get member profile; None when the id is unknown
    pub async fn get_user(&self, user_id: i32) -> AppResult<Option<UserProfile>> {
        self.repository.users.get_profile(user_id).await
    }

    /// Get librarian profile; None when the id is unknown
    pub async fn get_staff(&self, staff_id: i32) -> AppResult<Option<StaffProfile>> {
        self.repository.staff.get_profile(staff_id).await
    }

    pub async fn borrowing_history(&self, user_id: i32) -> AppResult<Vec<BorrowRecord>> {
        let records = self.repository.borrows.history(user_id).await?;
        tracing::debug!(user_id, count = records.len(), "Loaded borrowing history");
        Ok(records)
    }
}
