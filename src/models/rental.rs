//! Rental receipts and catalog statistics

use rust_decimal::Decimal;
use serde::Serialize;

/// Result of a successful rental
#[derive(Debug, Clone, Serialize)]
pub struct RentalReceipt {
    /// Title in its stored casing, not the probe's
    pub title: String,
    /// Name of the renting user
    pub renter: String,
}

/// Result of a successful return
#[derive(Debug, Clone, Serialize)]
pub struct ReturnReceipt {
    pub title: String,
    pub rating: Option<Decimal>,
    /// Present exactly when a rating was supplied
    pub new_balance: Option<Decimal>,
}

/// Snapshot of catalog counts and the current balance
#[derive(Debug, Clone, Serialize)]
pub struct CatalogStats {
    pub books: usize,
    pub available: usize,
    pub rented: usize,
    pub users: usize,
    pub balance: Decimal,
}
