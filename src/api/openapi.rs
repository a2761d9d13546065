//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, books, health, profiles};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bibliodesk API",
        version = "0.3.0",
        description = "Small library management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Sign-in
        auth::signin_member,
        auth::signin_librarian,
        // Profiles
        profiles::get_user_info,
        profiles::get_staff_info,
        profiles::get_borrowing_info,
        // Catalog
        books::search_books,
        books::popular_books,
        books::create_book,
        books::update_book,
        books::delete_book,
    ),
    components(
        schemas(
            // Sign-in
            crate::models::session::Role,
            crate::models::session::SignInRequest,
            crate::models::session::MemberSignInResponse,
            crate::models::session::LibrarianSignInResponse,
            // Profiles
            crate::models::user::UserProfile,
            crate::models::staff::StaffProfile,
            crate::models::borrow::BorrowRecord,
            // Catalog
            crate::models::book::Book,
            crate::models::book::BookInput,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Member and librarian sign-in"),
        (name = "profiles", description = "Profiles and borrowing history"),
        (name = "books", description = "Catalog search and management")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
