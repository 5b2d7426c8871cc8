//! Catalog management service

use tracing::{debug, info};

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookSummary, CreateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Add a book to the catalog. Always succeeds; duplicate titles are
    /// permitted.
    pub fn add_book(&self, req: CreateBook) -> Book {
        let book = self.repository.books.insert(Book::new(req));
        info!(title = %book.title, author = %book.author.name, category = %book.category, "Book added");
        book
    }

    /// Remove the first book whose title matches, case-insensitively.
    pub fn remove_book(&self, title: &str) -> AppResult<Book> {
        match self.repository.books.remove_first(title) {
            Some(book) => {
                info!(title = %book.title, "Book removed");
                Ok(book)
            }
            None => {
                debug!(title, "Remove failed, no such book");
                Err(AppError::NotFound(format!("book '{}'", title)))
            }
        }
    }

    /// All books in insertion order, as read-only summaries.
    pub fn list_books(&self) -> Vec<BookSummary> {
        self.repository.books.all().iter().map(Book::summary).collect()
    }
}
