//! Books store

use std::sync::Arc;

use parking_lot::RwLock;

use crate::models::Book;
use crate::repository::normalize_key;

/// Insertion-ordered book store. Duplicate titles are permitted; every
/// lookup binds to the earliest-inserted match.
#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a book and return the stored record. Never fails.
    pub fn insert(&self, book: Book) -> Book {
        self.books.write().push(book.clone());
        book
    }

    /// Remove and return the first book whose title matches.
    pub fn remove_first(&self, title: &str) -> Option<Book> {
        let key = normalize_key(title);
        let mut books = self.books.write();
        let pos = books.iter().position(|b| normalize_key(&b.title) == key)?;
        Some(books.remove(pos))
    }

    /// Run `f` against the first book whose title matches. `None` when no
    /// book matches; the store is untouched in that case.
    pub fn update_first<T>(&self, title: &str, f: impl FnOnce(&mut Book) -> T) -> Option<T> {
        let key = normalize_key(title);
        let mut books = self.books.write();
        books
            .iter_mut()
            .find(|b| normalize_key(&b.title) == key)
            .map(f)
    }

    /// First matching book, cloned.
    pub fn find_first(&self, title: &str) -> Option<Book> {
        let key = normalize_key(title);
        let books = self.books.read();
        books
            .iter()
            .find(|b| normalize_key(&b.title) == key)
            .cloned()
    }

    /// All books in insertion order.
    pub fn all(&self) -> Vec<Book> {
        self.books.read().clone()
    }

    pub fn count(&self) -> usize {
        self.books.read().len()
    }
}
