//! Libris - Interactive Library Catalog Manager
//!
//! An in-memory catalog of books and users with rental tracking and a
//! rating-funded running balance, driven by a line-oriented menu.

pub mod config;
pub mod error;
pub mod menu;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
