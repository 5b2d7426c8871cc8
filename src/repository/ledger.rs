//! Balance ledger

use std::sync::Arc;

use parking_lot::RwLock;
use rust_decimal::Decimal;

/// Running balance accumulated from ratings supplied at return time.
/// Starts at zero; credits are neither sign-guarded nor capped.
#[derive(Clone, Default)]
pub struct LedgerRepository {
    balance: Arc<RwLock<Decimal>>,
}

impl LedgerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the balance and return the new total.
    pub fn credit(&self, amount: Decimal) -> Decimal {
        let mut balance = self.balance.write();
        *balance += amount;
        *balance
    }

    pub fn balance(&self) -> Decimal {
        *self.balance.read()
    }
}
