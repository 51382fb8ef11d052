//! Data models

pub mod author;
pub mod book;

pub use author::{Author, AuthorSummary, CreateAuthorForm, NewAuthor};
pub use book::BookSummary;
