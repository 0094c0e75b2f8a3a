//! Book catalogue management service

use validator::Validate;

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List the whole catalogue
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Add a book to the catalogue. Inputs are trimmed before validation.
    pub async fn create(&self, book: CreateBook) -> AppResult<Book> {
        let book = book.trimmed();
        book.validate()?;

        let created = self.repository.books.create(&book).await?;
        tracing::info!("Book '{}' added with id {}", created.title, created.id);
        Ok(created)
    }

    /// Replace a book's mutable fields, keyed by id
    pub async fn update(&self, id: i32, book: UpdateBook) -> AppResult<Book> {
        let book = book.trimmed();
        book.validate()?;

        let updated = self.repository.books.update(id, &book).await?;
        tracing::info!("Book with id {} updated", id);
        Ok(updated)
    }

    /// Remove a book and its loan history
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!("Book with id {} deleted", id);
        Ok(())
    }
}
