//! Users store

use std::sync::Arc;

use parking_lot::RwLock;

use crate::models::User;
use crate::repository::normalize_key;

/// Insertion-ordered user store keyed by email. Duplicate emails are
/// permitted; every lookup binds to the earliest-inserted match.
#[derive(Clone, Default)]
pub struct UsersRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl UsersRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user and return the stored record. Never fails.
    pub fn insert(&self, user: User) -> User {
        self.users.write().push(user.clone());
        user
    }

    /// Remove and return the first user whose email matches.
    pub fn remove_first(&self, email: &str) -> Option<User> {
        let key = normalize_key(email);
        let mut users = self.users.write();
        let pos = users.iter().position(|u| normalize_key(&u.email) == key)?;
        Some(users.remove(pos))
    }

    /// First matching user, cloned.
    pub fn find_first(&self, email: &str) -> Option<User> {
        let key = normalize_key(email);
        let users = self.users.read();
        users
            .iter()
            .find(|u| normalize_key(&u.email) == key)
            .cloned()
    }

    pub fn count(&self) -> usize {
        self.users.read().len()
    }
}
