//! Book model and related types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::author::Author;

/// A single copy of a book held by the catalog. The title is the lookup
/// key, matched case-insensitively; duplicates are permitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: Author,
    pub category: String,
    /// False while the book is out on rental
    pub available: bool,
    /// Last rating supplied at return time, if any
    pub rating: Option<Decimal>,
}

/// Create book request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBook {
    pub title: String,
    pub author_name: String,
    pub category: String,
}

/// Read-only listing view of a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookSummary {
    pub title: String,
    pub author: String,
    pub category: String,
    pub available: bool,
}

impl Book {
    /// New catalog entry: available and unrated
    pub fn new(req: CreateBook) -> Self {
        Self {
            title: req.title,
            author: Author::new(req.author_name),
            category: req.category,
            available: true,
            rating: None,
        }
    }

    pub fn summary(&self) -> BookSummary {
        BookSummary {
            title: self.title.clone(),
            author: self.author.name.clone(),
            category: self.category.clone(),
            available: self.available,
        }
    }
}
