//! Business logic services

pub mod books;
pub mod queries;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
    pub queries: queries::QueriesService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            books: books::BooksService::new(repository.clone()),
            queries: queries::QueriesService::new(repository.clone()),
            repository,
        }
    }

    /// Repository access for infrastructure probes
    pub fn repository(&self) -> &Repository {
        &self.repository
    }
}
