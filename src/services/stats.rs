//! Statistics service

use crate::{models::CatalogStats, repository::Repository};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Snapshot of catalog counts and the current balance.
    pub fn summary(&self) -> CatalogStats {
        let books = self.repository.books.all();
        let available = books.iter().filter(|b| b.available).count();
        CatalogStats {
            books: books.len(),
            available,
            rented: books.len() - available,
            users: self.repository.users.count(),
            balance: self.repository.ledger.balance(),
        }
    }
}
