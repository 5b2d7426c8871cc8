//! User management service

use tracing::{debug, info};

use crate::{
    error::{AppError, AppResult},
    models::{CreateUser, User},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a user. Always succeeds; duplicate emails are permitted.
    pub fn add_user(&self, req: CreateUser) -> User {
        let user = self.repository.users.insert(User {
            name: req.name,
            email: req.email,
        });
        info!(name = %user.name, email = %user.email, "User added");
        user
    }

    /// Remove the first user whose email matches, case-insensitively.
    pub fn remove_user(&self, email: &str) -> AppResult<User> {
        match self.repository.users.remove_first(email) {
            Some(user) => {
                info!(email = %user.email, "User removed");
                Ok(user)
            }
            None => {
                debug!(email, "Remove failed, no such user");
                Err(AppError::NotFound(format!("user '{}'", email)))
            }
        }
    }
}
