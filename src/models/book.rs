//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Catalogue entry from the `book` table.
///
/// `id` is a database-assigned surrogate key, unique and immutable once a
/// row exists. `isbn` and `year_published` are nullable in storage: rows
/// created before those columns were written carry NULL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub publisher_id: i32,
    pub isbn: Option<String>,
    pub year_published: Option<i32>,
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,
    pub publisher_id: i32,
    pub isbn: Option<String>,
    pub year_published: Option<i32>,
}

impl CreateBook {
    /// Normalize string inputs: trim whitespace, collapse a blank ISBN to
    /// absent. Safe to call on already-trimmed input.
    pub fn trimmed(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            publisher_id: self.publisher_id,
            isbn: normalize_isbn(self.isbn),
            year_published: self.year_published,
        }
    }
}

/// Update book request (full-row update keyed by id)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,
    pub publisher_id: i32,
    pub isbn: Option<String>,
    pub year_published: Option<i32>,
}

impl UpdateBook {
    pub fn trimmed(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            publisher_id: self.publisher_id,
            isbn: normalize_isbn(self.isbn),
            year_published: self.year_published,
        }
    }
}

fn normalize_isbn(isbn: Option<String>) -> Option<String> {
    isbn.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: &str, author: &str) -> CreateBook {
        CreateBook {
            title: title.to_string(),
            author: author.to_string(),
            publisher_id: 1,
            isbn: None,
            year_published: None,
        }
    }

    #[test]
    fn empty_title_is_rejected() {
        assert!(payload("", "Frank Herbert").validate().is_err());
        assert!(payload("Dune", "").validate().is_err());
        assert!(payload("Dune", "Frank Herbert").validate().is_ok());
    }

    #[test]
    fn whitespace_only_title_is_rejected_after_trim() {
        let book = payload("   ", "Frank Herbert").trimmed();
        assert!(book.validate().is_err());
    }

    #[test]
    fn trimmed_normalizes_blank_isbn_to_absent() {
        let book = CreateBook {
            isbn: Some("   ".to_string()),
            ..payload(" Dune ", "Frank Herbert")
        }
        .trimmed();

        assert_eq!(book.title, "Dune");
        assert_eq!(book.isbn, None);
    }
}
