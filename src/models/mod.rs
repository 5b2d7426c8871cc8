//! Domain models

pub mod author;
pub mod book;
pub mod rental;
pub mod user;

pub use author::Author;
pub use book::{Book, BookSummary, CreateBook};
pub use rental::{CatalogStats, RentalReceipt, ReturnReceipt};
pub use user::{CreateUser, User};
