//! Author lifecycle service
//!
//! Stateless orchestration of the author workflows: listing, detail with
//! related books, validated creation, and deletion gated on referencing
//! books. Update is declared but not implemented.

use std::sync::Arc;

use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{Author, AuthorSummary, BookSummary, CreateAuthorForm},
    repository::{AuthorSortField, AuthorStore, SortOrder},
    validation::{validate_author_form, FieldError},
};

/// Author detail view: the author plus the books referencing it
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthorDetail {
    pub author: Author,
    pub books: Vec<BookSummary>,
}

/// Delete confirmation view: the author and the books blocking deletion
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeleteConfirmation {
    pub author: Author,
    pub books: Vec<BookSummary>,
}

/// Outcome of a creation attempt
#[derive(Debug)]
pub enum CreateAuthorOutcome {
    Created(Author),
    /// Validation failed; the submitted form is echoed back so the caller
    /// can repopulate a re-rendered form
    Invalid {
        author: CreateAuthorForm,
        errors: Vec<FieldError>,
    },
}

/// Outcome of a delete-confirmation view request
#[derive(Debug)]
pub enum DeletePreview {
    Confirm(DeleteConfirmation),
    /// Nothing to delete; callers redirect back to the author list
    MissingAuthor,
}

/// Outcome of a delete submission
#[derive(Debug)]
pub enum DeleteAuthorOutcome {
    Deleted,
    /// Referencing books exist; the author must never be deleted while
    /// any remain
    Blocked(DeleteConfirmation),
    NotFound,
}

#[derive(Clone)]
pub struct AuthorsService {
    store: Arc<dyn AuthorStore>,
}

impl AuthorsService {
    pub fn new(store: Arc<dyn AuthorStore>) -> Self {
        Self { store }
    }

    /// List all authors ordered by last name
    pub async fn list(&self) -> AppResult<Vec<AuthorSummary>> {
        let authors = self
            .store
            .find_all(AuthorSortField::LastName, SortOrder::Asc)
            .await?;
        Ok(authors.into_iter().map(AuthorSummary::from).collect())
    }

    /// Author detail with referencing books.
    ///
    /// Both lookups are independent reads issued concurrently; the first
    /// error wins. A missing author is NotFound regardless of the books
    /// result.
    pub async fn detail(&self, id: i32) -> AppResult<AuthorDetail> {
        let (author, books) = tokio::try_join!(
            self.store.find_by_id(id),
            self.store.find_books_by_author(id),
        )?;
        let author = author.ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))?;
        Ok(AuthorDetail { author, books })
    }

    /// Validate a creation form and persist the author on success
    pub async fn create(&self, form: CreateAuthorForm) -> AppResult<CreateAuthorOutcome> {
        match validate_author_form(&form) {
            Ok(payload) => {
                let author = self.store.create(&payload).await?;
                tracing::info!("Created author id={} ({})", author.id, author.full_name());
                Ok(CreateAuthorOutcome::Created(author))
            }
            Err(errors) => Ok(CreateAuthorOutcome::Invalid {
                author: form,
                errors,
            }),
        }
    }

    /// Fetch the data for a delete-confirmation view.
    ///
    /// A missing author is not an error here: stale links land on this
    /// view after the author is already gone, and the caller just sends
    /// the user back to the list.
    pub async fn prepare_delete(&self, id: i32) -> AppResult<DeletePreview> {
        let (author, books) = tokio::try_join!(
            self.store.find_by_id(id),
            self.store.find_books_by_author(id),
        )?;
        match author {
            Some(author) => Ok(DeletePreview::Confirm(DeleteConfirmation { author, books })),
            None => Ok(DeletePreview::MissingAuthor),
        }
    }

    /// Delete an author unless books still reference it.
    ///
    /// Dependents are re-fetched at submission time; a confirmation view
    /// rendered earlier may be stale.
    pub async fn confirm_delete(&self, id: i32) -> AppResult<DeleteAuthorOutcome> {
        let (author, books) = tokio::try_join!(
            self.store.find_by_id(id),
            self.store.find_books_by_author(id),
        )?;
        let Some(author) = author else {
            return Ok(DeleteAuthorOutcome::NotFound);
        };
        if !books.is_empty() {
            return Ok(DeleteAuthorOutcome::Blocked(DeleteConfirmation {
                author,
                books,
            }));
        }
        if self.store.delete_by_id(id).await? {
            tracing::info!("Deleted author id={}", id);
            Ok(DeleteAuthorOutcome::Deleted)
        } else {
            Ok(DeleteAuthorOutcome::NotFound)
        }
    }

    /// Author update is declared but not implemented
    pub async fn update(&self, id: i32, _form: CreateAuthorForm) -> AppResult<Author> {
        Err(AppError::NotImplemented(format!(
            "Update for author {} is not implemented",
            id
        )))
    }
}
