//! Loan model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Loan from the `loans` table, linking a member to a book.
///
/// `date_returned` stays NULL while the book is out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Loan {
    pub id: i32,
    pub member_id: i32,
    pub book_id: i32,
    pub date_borrowed: NaiveDate,
    pub due_date: NaiveDate,
    pub date_returned: Option<NaiveDate>,
}

/// Borrow history row for a book: who borrowed it and when.
/// Produced by the member/loans/book join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BorrowRecord {
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub date_borrowed: NaiveDate,
    pub due_date: NaiveDate,
    pub date_returned: Option<NaiveDate>,
}
