//! Sign-in endpoints

use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::session::{
        LibrarianSignInResponse, MemberSignInResponse, Role, SignInRequest, SIGN_IN_MESSAGE,
    },
    AppState,
};

/// Member sign-in
#[utoipa::path(
    post,
    path = "/signin/member",
    tag = "auth",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Signed in", body = MemberSignInResponse),
        (status = 400, description = "Malformed credentials", body = crate::error::ErrorResponse),
        (status = 401, description = "Invalid password", body = crate::error::ErrorResponse),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn signin_member(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<SignInRequest>, AppError>,
) -> AppResult<Json<MemberSignInResponse>> {
    request.validate()?;

    let signed_in = state
        .services
        .auth
        .sign_in(Role::Member, request.email.trim(), &request.password)
        .await?;

    Ok(Json(MemberSignInResponse {
        message: SIGN_IN_MESSAGE.to_string(),
        user_id: signed_in.subject_id,
        token: signed_in.token,
    }))
}

/// Librarian sign-in
#[utoipa::path(
    post,
    path = "/signin/librarian",
    tag = "auth",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Signed in", body = LibrarianSignInResponse),
        (status = 400, description = "Malformed credentials", body = crate::error::ErrorResponse),
        (status = 401, description = "Invalid password", body = crate::error::ErrorResponse),
        (status = 404, description = "Staff not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn signin_librarian(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<SignInRequest>, AppError>,
) -> AppResult<Json<LibrarianSignInResponse>> {
    request.validate()?;

    let signed_in = state
        .services
        .auth
        .sign_in(Role::Librarian, request.email.trim(), &request.password)
        .await?;

    Ok(Json(LibrarianSignInResponse {
        message: SIGN_IN_MESSAGE.to_string(),
        staff_id: signed_in.subject_id,
        token: signed_in.token,
    }))
}
