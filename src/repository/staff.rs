//! Librarians repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{staff::StaffProfile, user::Credentials},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StaffStore: Send + Sync {
    async fn get_profile(&self, staff_id: i32) -> AppResult<Option<StaffProfile>>;

    /// Sign-in lookup on the `mail` column
    async fn get_credentials_by_email(&self, email: &str) -> AppResult<Option<Credentials>>;
}

#[derive(Clone)]
pub struct StaffRepository {
    pool: Pool<Postgres>,
}

impl StaffRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StaffStore for StaffRepository {
    async fn get_profile(&self, staff_id: i32) -> AppResult<Option<StaffProfile>> {
        let staff = sqlx::query_as::<_, StaffProfile>(
            "SELECT staff_id, name, phone_number, mail FROM staff WHERE staff_id = $1",
        )
        .bind(staff_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(staff)
    }

    async fn get_credentials_by_email(&self, email: &str) -> AppResult<Option<Credentials>> {
        let credentials = sqlx::query_as::<_, Credentials>(
            r#"
            SELECT staff_id AS id, mail AS email, password AS password_hash
            FROM staff
            WHERE LOWER(mail) = LOWER($1)
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(credentials)
    }
}
