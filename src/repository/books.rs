//! Books repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
};

const BOOK_COLUMNS: &str = "id, title, author, publisher_id, isbn, year_published";

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List the whole catalogue
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(&format!(
            "SELECT {} FROM book ORDER BY id",
            BOOK_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(&format!(
            "SELECT {} FROM book WHERE id = $1",
            BOOK_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Insert a new book; the id is assigned by the database
    pub async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO book (title, author, publisher_id, isbn, year_published)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.publisher_id)
        .bind(&book.isbn)
        .bind(book.year_published)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Full-row update keyed by id
    pub async fn update(&self, id: i32, book: &UpdateBook) -> AppResult<Book> {
        let result = sqlx::query(
            r#"
            UPDATE book
            SET title = $1, author = $2, publisher_id = $3, isbn = $4, year_published = $5
            WHERE id = $6
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.publisher_id)
        .bind(&book.isbn)
        .bind(book.year_published)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }

        self.get_by_id(id).await
    }

    /// Delete a book and its loan history. Deleting an id that matches no
    /// row is not an error.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM loans WHERE book_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let result = sqlx::query("DELETE FROM book WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!("Delete of book id {} matched no row", id);
        }

        Ok(())
    }

    /// Books by exact author name. Case sensitivity follows the database's
    /// default string comparison.
    pub async fn list_by_author(&self, author: &str) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(&format!(
            "SELECT {} FROM book WHERE author = $1 ORDER BY id",
            BOOK_COLUMNS
        ))
        .bind(author)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// First book with the exact title, if any
    pub async fn get_by_title(&self, title: &str) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(&format!(
            "SELECT {} FROM book WHERE title = $1 ORDER BY id LIMIT 1",
            BOOK_COLUMNS
        ))
        .bind(title)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }
}
