//! Member and librarian profile endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{borrow::BorrowRecord, staff::StaffProfile, user::UserProfile},
    AppState,
};

use super::AuthenticatedUser;

/// Get a member profile (`null` when the id is unknown)
#[utoipa::path(
    get,
    path = "/user-info/{userId}",
    tag = "profiles",
    security(("bearer_auth" = [])),
    params(
        ("userId" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Member profile or null", body = Option<UserProfile>),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Another member's profile")
    )
)]
pub async fn get_user_info(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(user_id): Path<i32>,
) -> AppResult<Json<Option<UserProfile>>> {
    claims.require_member_access(user_id)?;

    let user = state.services.profiles.get_user(user_id).await?;
    Ok(Json(user))
}

/// Get a librarian profile (`null` when the id is unknown)
#[utoipa::path(
    get,
    path = "/staff-info/{staffId}",
    tag = "profiles",
    security(("bearer_auth" = [])),
    params(
        ("staffId" = i32, Path, description = "Staff ID")
    ),
    responses(
        (status = 200, description = "Librarian profile or null", body = Option<StaffProfile>),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Another librarian's profile")
    )
)]
pub async fn get_staff_info(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(staff_id): Path<i32>,
) -> AppResult<Json<Option<StaffProfile>>> {
    claims.require_staff_self(staff_id)?;

    let staff = state.services.profiles.get_staff(staff_id).await?;
    Ok(Json(staff))
}

/// Get a member's borrowing history
#[utoipa::path(
    get,
    path = "/borrowing-info/{userId}",
    tag = "profiles",
    security(("bearer_auth" = [])),
    params(
        ("userId" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Borrowing history", body = Vec<BorrowRecord>),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Another member's history")
    )
)]
pub async fn get_borrowing_info(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(user_id): Path<i32>,
) -> AppResult<Json<Vec<BorrowRecord>>> {
    claims.require_member_access(user_id)?;

    let records = state.services.profiles.borrowing_history(user_id).await?;
    Ok(Json(records))
}
