//! Form input validation
//!
//! Author creation arrives as untyped form strings. Validation runs every
//! field's rules and accumulates errors across fields, so a re-rendered
//! form can show all problems at once.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{CreateAuthorForm, NewAuthor};

/// Names must be strictly ASCII alphanumeric, no punctuation or accents
static ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A single validation failure on one form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Validate and normalize an author creation form.
///
/// Per field: trim, then required check (names only; a missing name skips
/// that field's remaining rules), then markup escaping, then the
/// alphanumeric rule; date fields parse as ISO-8601 calendar dates.
/// Empty or whitespace-only dates count as "not provided".
pub fn validate_author_form(form: &CreateAuthorForm) -> Result<NewAuthor, Vec<FieldError>> {
    let mut errors = Vec::new();

    let first_name = validate_name(form.first_name.as_deref(), "first_name", "First name", &mut errors);
    let last_name = validate_name(form.last_name.as_deref(), "last_name", "Last name", &mut errors);
    let date_of_birth = validate_date(
        form.date_of_birth.as_deref(),
        "date_of_birth",
        "Invalid date of birth",
        &mut errors,
    );
    let date_of_death = validate_date(
        form.date_of_death.as_deref(),
        "date_of_death",
        "Invalid date of death",
        &mut errors,
    );

    match (first_name, last_name) {
        (Some(first_name), Some(last_name)) if errors.is_empty() => Ok(NewAuthor {
            first_name,
            last_name,
            date_of_birth,
            date_of_death,
        }),
        _ => Err(errors),
    }
}

fn validate_name(
    raw: Option<&str>,
    field: &str,
    label: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let trimmed = raw.unwrap_or_default().trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new(field, format!("{} must be specified.", label)));
        return None;
    }
    let escaped = escape(trimmed);
    if !ALPHANUMERIC.is_match(&escaped) {
        errors.push(FieldError::new(
            field,
            format!("{} cannot have non-numeric characters.", label),
        ));
        return None;
    }
    Some(escaped)
}

fn validate_date(
    raw: Option<&str>,
    field: &str,
    message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<NaiveDate> {
    let trimmed = raw.unwrap_or_default().trim();
    if trimmed.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(FieldError::new(field, message));
            None
        }
    }
}

/// Neutralize markup-significant characters before values reach any
/// rendered output
fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            '\\' => out.push_str("&#x5C;"),
            '`' => out.push_str("&#96;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(
        first_name: Option<&str>,
        last_name: Option<&str>,
        date_of_birth: Option<&str>,
        date_of_death: Option<&str>,
    ) -> CreateAuthorForm {
        CreateAuthorForm {
            first_name: first_name.map(String::from),
            last_name: last_name.map(String::from),
            date_of_birth: date_of_birth.map(String::from),
            date_of_death: date_of_death.map(String::from),
        }
    }

    #[test]
    fn valid_form_normalizes_fields() {
        let payload = validate_author_form(&form(
            Some("  Jane "),
            Some("Austen"),
            Some("1775-12-16"),
            Some("1817-07-18"),
        ))
        .unwrap();
        assert_eq!(payload.first_name, "Jane");
        assert_eq!(payload.last_name, "Austen");
        assert_eq!(payload.date_of_birth, NaiveDate::from_ymd_opt(1775, 12, 16));
        assert_eq!(payload.date_of_death, NaiveDate::from_ymd_opt(1817, 7, 18));
    }

    #[test]
    fn missing_first_name_yields_single_error() {
        let errors = validate_author_form(&form(Some(""), Some("Austen"), None, None)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "first_name");
        assert_eq!(errors[0].message, "First name must be specified.");
    }

    #[test]
    fn whitespace_only_name_counts_as_missing() {
        let errors = validate_author_form(&form(Some("   "), Some("Austen"), None, None)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "First name must be specified.");
    }

    #[test]
    fn punctuated_name_fails_alphanumeric_rule() {
        let errors =
            validate_author_form(&form(Some("Jo-Ann"), Some("Austen"), None, None)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "first_name");
        assert_eq!(errors[0].message, "First name cannot have non-numeric characters.");
    }

    #[test]
    fn errors_accumulate_across_fields() {
        let errors = validate_author_form(&form(
            Some(""),
            Some("O'Brien"),
            Some("not-a-date"),
            None,
        ))
        .unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["first_name", "last_name", "date_of_birth"]);
    }

    #[test]
    fn empty_or_blank_dates_are_not_provided() {
        let payload =
            validate_author_form(&form(Some("Jane"), Some("Austen"), Some("   "), Some(""))).unwrap();
        assert_eq!(payload.date_of_birth, None);
        assert_eq!(payload.date_of_death, None);
    }

    #[test]
    fn malformed_date_is_reported() {
        let errors = validate_author_form(&form(
            Some("Jane"),
            Some("Austen"),
            Some("16/12/1775"),
            None,
        ))
        .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "date_of_birth");
        assert_eq!(errors[0].message, "Invalid date of birth");
    }

    #[test]
    fn escape_neutralizes_markup_characters() {
        assert_eq!(escape("a<b>&c"), "a&lt;b&gt;&amp;c");
        assert_eq!(escape("plain"), "plain");
    }
}
