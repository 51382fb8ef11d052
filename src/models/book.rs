//! Book projection referenced by author views
//!
//! Books are owned by the catalog at large; this service only reads the
//! fields needed for author detail and delete-confirmation views.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Short book projection (title and summary only)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookSummary {
    pub id: i32,
    pub title: String,
    pub summary: Option<String>,
}
