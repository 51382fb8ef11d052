//! Author model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Author record from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl Author {
    /// Display name in "last_name, first_name" form
    pub fn full_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }

    /// Human-readable lifespan, open-ended when either date is absent
    pub fn lifespan(&self) -> String {
        format!(
            "{} - {}",
            self.date_of_birth.map(format_date).unwrap_or_default(),
            self.date_of_death.map(format_date).unwrap_or_default()
        )
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Author list entry with derived display fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AuthorSummary {
    pub id: i32,
    pub name: String,
    pub lifespan: String,
}

impl From<Author> for AuthorSummary {
    fn from(author: Author) -> Self {
        Self {
            name: author.full_name(),
            lifespan: author.lifespan(),
            id: author.id,
        }
    }
}

/// Raw author creation form as submitted, all fields optional strings
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateAuthorForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub date_of_death: Option<String>,
}

/// Validated and normalized author creation payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(dob: Option<NaiveDate>, dod: Option<NaiveDate>) -> Author {
        Author {
            id: 1,
            first_name: "Jane".to_string(),
            last_name: "Austen".to_string(),
            date_of_birth: dob,
            date_of_death: dod,
        }
    }

    #[test]
    fn full_name_is_last_name_first() {
        let a = author(None, None);
        assert_eq!(a.full_name(), "Austen, Jane");
    }

    #[test]
    fn lifespan_formats_both_dates() {
        let a = author(
            NaiveDate::from_ymd_opt(1775, 12, 16),
            NaiveDate::from_ymd_opt(1817, 7, 18),
        );
        assert_eq!(a.lifespan(), "Dec 16, 1775 - Jul 18, 1817");
    }

    #[test]
    fn lifespan_is_open_ended_without_death_date() {
        let a = author(NaiveDate::from_ymd_opt(1775, 12, 16), None);
        assert_eq!(a.lifespan(), "Dec 16, 1775 - ");
    }

    #[test]
    fn lifespan_is_empty_range_without_dates() {
        let a = author(None, None);
        assert_eq!(a.lifespan(), " - ");
    }
}
