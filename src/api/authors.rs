//! Author API endpoints
//!
//! Thin adapters between HTTP and the authors service. Validation and
//! delete-gating outcomes come back as structured variants; the handlers
//! only pick status codes, bodies and redirect targets.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{Author, AuthorSummary, CreateAuthorForm},
    services::authors::{
        AuthorDetail, CreateAuthorOutcome, DeleteAuthorOutcome, DeleteConfirmation, DeletePreview,
    },
    validation::FieldError,
};

const AUTHORS_LIST_URL: &str = "/api/v1/authors";

/// Body of a rejected creation: the echoed form plus field errors
#[derive(Serialize, ToSchema)]
pub struct InvalidAuthorForm {
    pub author: CreateAuthorForm,
    pub errors: Vec<FieldError>,
}

/// List all authors, sorted by last name
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    responses(
        (status = 200, description = "Authors list", body = Vec<AuthorSummary>)
    )
)]
pub async fn list_authors(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<AuthorSummary>>> {
    let authors = state.services.authors.list().await?;
    Ok(Json(authors))
}

/// Empty creation form scaffold
#[utoipa::path(
    get,
    path = "/authors/new",
    tag = "authors",
    responses(
        (status = 200, description = "Empty author form", body = CreateAuthorForm)
    )
)]
pub async fn new_author_form() -> Json<CreateAuthorForm> {
    Json(CreateAuthorForm::default())
}

/// Create an author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    request_body = CreateAuthorForm,
    responses(
        (status = 201, description = "Author created", body = Author),
        (status = 422, description = "Validation failed", body = InvalidAuthorForm)
    )
)]
pub async fn create_author(
    State(state): State<crate::AppState>,
    Json(form): Json<CreateAuthorForm>,
) -> AppResult<Response> {
    match state.services.authors.create(form).await? {
        CreateAuthorOutcome::Created(author) => {
            let location = format!("{}/{}", AUTHORS_LIST_URL, author.id);
            Ok((
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(author),
            )
                .into_response())
        }
        CreateAuthorOutcome::Invalid { author, errors } => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(InvalidAuthorForm { author, errors }),
        )
            .into_response()),
    }
}

/// Author detail with referencing books
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author detail", body = AuthorDetail),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<AuthorDetail>> {
    let detail = state.services.authors.detail(id).await?;
    Ok(Json(detail))
}

/// Edit form for an author (not implemented)
#[utoipa::path(
    get,
    path = "/authors/{id}/edit",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 501, description = "Not implemented")
    )
)]
pub async fn edit_author_form(Path(id): Path<i32>) -> AppResult<StatusCode> {
    Err(AppError::NotImplemented(format!(
        "Edit form for author {} is not implemented",
        id
    )))
}

/// Update an author (not implemented)
#[utoipa::path(
    put,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    request_body = CreateAuthorForm,
    responses(
        (status = 501, description = "Not implemented")
    )
)]
pub async fn update_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(form): Json<CreateAuthorForm>,
) -> AppResult<Json<Author>> {
    let author = state.services.authors.update(id, form).await?;
    Ok(Json(author))
}

/// Delete-confirmation view; redirects to the list when the author is
/// already gone
#[utoipa::path(
    get,
    path = "/authors/{id}/delete",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Delete confirmation data", body = DeleteConfirmation),
        (status = 303, description = "Author absent, back to the list")
    )
)]
pub async fn delete_author_form(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Response> {
    match state.services.authors.prepare_delete(id).await? {
        DeletePreview::Confirm(confirmation) => Ok(Json(confirmation).into_response()),
        DeletePreview::MissingAuthor => Ok(Redirect::to(AUTHORS_LIST_URL).into_response()),
    }
}

/// Delete an author unless books still reference it
#[utoipa::path(
    post,
    path = "/authors/{id}/delete",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 303, description = "Author deleted, back to the list"),
        (status = 409, description = "Blocked by referencing books", body = DeleteConfirmation),
        (status = 404, description = "Author not found")
    )
)]
pub async fn delete_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Response> {
    match state.services.authors.confirm_delete(id).await? {
        DeleteAuthorOutcome::Deleted => Ok(Redirect::to(AUTHORS_LIST_URL).into_response()),
        DeleteAuthorOutcome::Blocked(confirmation) => {
            Ok((StatusCode::CONFLICT, Json(confirmation)).into_response())
        }
        DeleteAuthorOutcome::NotFound => {
            Err(AppError::NotFound(format!("Author {} not found", id)))
        }
    }
}
