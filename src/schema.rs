//! Startup verification of the expected database layout

use sqlx::{Pool, Postgres};

use crate::error::{AppError, AppResult};

/// Tables and columns the repository layer relies on
const EXPECTED: &[(&str, &[&str])] = &[
    (
        "book",
        &["id", "title", "author", "publisher_id", "isbn", "year_published"],
    ),
    ("publisher", &["id", "name", "address", "phone", "email"]),
    (
        "member",
        &[
            "id",
            "first_name",
            "last_name",
            "email",
            "phone",
            "address",
            "date_of_membership",
        ],
    ),
    (
        "loans",
        &[
            "id",
            "member_id",
            "book_id",
            "date_borrowed",
            "due_date",
            "date_returned",
        ],
    ),
];

/// Check that every expected table and column exists, failing fast instead
/// of letting a later query surface the mismatch as a mapping error.
pub async fn verify(pool: &Pool<Postgres>) -> AppResult<()> {
    for (table, columns) in EXPECTED {
        let present: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT column_name FROM information_schema.columns
            WHERE table_schema = current_schema() AND table_name = $1
            "#,
        )
        .bind(table)
        .fetch_all(pool)
        .await?;

        if present.is_empty() {
            return Err(AppError::Schema(format!("Table '{}' not found", table)));
        }

        let missing: Vec<&str> = columns
            .iter()
            .filter(|column| !present.iter().any(|p| p.as_str() == **column))
            .copied()
            .collect();

        if !missing.is_empty() {
            return Err(AppError::Schema(format!(
                "Table '{}' is missing columns: {}",
                table,
                missing.join(", ")
            )));
        }
    }

    tracing::debug!("Database layout verified");
    Ok(())
}
