//! Author model

use serde::{Deserialize, Serialize};

/// Book author. Owned exclusively by its book; authors are not deduplicated
/// or shared across books.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    /// Carried on the model but never collected by the menu
    pub biography: Option<String>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            biography: None,
        }
    }
}
