//! In-memory repository layer
//!
//! The stores own all process state. Cloning a `Repository` handle shares
//! the same underlying stores, the way a pooled database handle is cloned
//! into each service.

pub mod books;
pub mod ledger;
pub mod users;

/// Main repository struct bundling the in-memory stores
#[derive(Clone, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
    pub users: users::UsersRepository,
    pub ledger: ledger::LedgerRepository,
}

impl Repository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

/// Fold a title or email into its case-insensitive lookup key.
pub(crate) fn normalize_key(s: &str) -> String {
    s.to_lowercase()
}
