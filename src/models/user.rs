//! User model and related types

use serde::{Deserialize, Serialize};

/// Library user. The email is the lookup key, matched case-insensitively;
/// duplicates are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// Create user request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
}
