//! Loans repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::loan::{BorrowRecord, Loan},
};

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all loan records
    pub async fn list(&self) -> AppResult<Vec<Loan>> {
        let loans = sqlx::query_as::<_, Loan>(
            r#"
            SELECT id, member_id, book_id, date_borrowed, due_date, date_returned
            FROM loans
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(loans)
    }

    /// Borrow history for a book title: each loan of the title with the
    /// borrowing member's name and the loan dates, oldest first.
    pub async fn for_book_title(&self, title: &str) -> AppResult<Vec<BorrowRecord>> {
        let records = sqlx::query_as::<_, BorrowRecord>(
            r#"
            SELECT m.first_name, m.last_name, b.title,
                   l.date_borrowed, l.due_date, l.date_returned
            FROM loans l
            JOIN member m ON l.member_id = m.id
            JOIN book b ON l.book_id = b.id
            WHERE b.title = $1
            ORDER BY l.date_borrowed
            "#,
        )
        .bind(title)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
