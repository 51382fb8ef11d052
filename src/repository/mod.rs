//! Persistence layer
//!
//! The service depends on the [`AuthorStore`] trait rather than a concrete
//! database type, so the store can be swapped for a mock in tests. The
//! production implementation lives in [`authors`].

pub mod authors;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Author, BookSummary, NewAuthor},
};

pub use authors::PgAuthorStore;

/// Sortable author columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorSortField {
    FirstName,
    LastName,
    DateOfBirth,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Persistence contract for author and related book records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorStore: Send + Sync {
    /// All authors ordered by the given field; empty when none exist
    async fn find_all(&self, sort: AuthorSortField, order: SortOrder) -> AppResult<Vec<Author>>;

    /// Author by id, `None` when no matching record exists
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Author>>;

    /// Books referencing the given author; empty when none exist
    async fn find_books_by_author(&self, author_id: i32) -> AppResult<Vec<BookSummary>>;

    /// Persist a new author and return the stored record with its identity
    async fn create(&self, author: &NewAuthor) -> AppResult<Author>;

    /// Delete by id; `false` when nothing matched
    async fn delete_by_id(&self, id: i32) -> AppResult<bool>;

    /// Connectivity probe for readiness checks
    async fn ping(&self) -> AppResult<()>;
}
