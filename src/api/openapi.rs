//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Authorcat API",
        version = "0.1.0",
        description = "Library Catalog Author Service REST API",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Authors
        authors::list_authors,
        authors::new_author_form,
        authors::create_author,
        authors::get_author,
        authors::edit_author_form,
        authors::update_author,
        authors::delete_author_form,
        authors::delete_author,
    ),
    components(
        schemas(
            // Authors
            crate::models::author::Author,
            crate::models::author::AuthorSummary,
            crate::models::author::CreateAuthorForm,
            crate::models::book::BookSummary,
            crate::services::authors::AuthorDetail,
            crate::services::authors::DeleteConfirmation,
            crate::validation::FieldError,
            authors::InvalidAuthorForm,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "authors", description = "Author catalog management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
