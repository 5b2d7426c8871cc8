//! Rental service: availability transitions and balance accumulation

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::{
    error::{AppError, AppResult},
    models::{RentalReceipt, ReturnReceipt},
    repository::Repository,
};

#[derive(Clone)]
pub struct RentalsService {
    repository: Repository,
}

impl RentalsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Rent a book to a user. Both must exist; their absence is reported as
    /// one combined not-found outcome, so the caller cannot tell which was
    /// missing. An unavailable book is reported without mutating state or
    /// identifying the user.
    pub fn rent_book(&self, title: &str, email: &str) -> AppResult<RentalReceipt> {
        let Some(user) = self.repository.users.find_first(email) else {
            debug!(title, email, "Rent failed, book or user missing");
            return Err(AppError::NotFound("book or user".to_string()));
        };

        let outcome = self.repository.books.update_first(title, |book| {
            if book.available {
                book.available = false;
                Ok(book.title.clone())
            } else {
                Err(AppError::NotAvailable(book.title.clone()))
            }
        });

        match outcome {
            None => {
                debug!(title, email, "Rent failed, book or user missing");
                Err(AppError::NotFound("book or user".to_string()))
            }
            Some(Err(err)) => {
                debug!(title, "Rent failed, book already out");
                Err(err)
            }
            Some(Ok(stored_title)) => {
                info!(title = %stored_title, renter = %user.name, "Book rented");
                Ok(RentalReceipt {
                    title: stored_title,
                    renter: user.name,
                })
            }
        }
    }

    /// Return a book. Availability is restored unconditionally. A supplied
    /// rating overwrites the book's prior rating and is credited to the
    /// balance; without one, rating and balance stay untouched. Ratings are
    /// conventionally 0-5 but no bound is enforced.
    pub fn return_book(&self, title: &str, rating: Option<Decimal>) -> AppResult<ReturnReceipt> {
        let stored_title = self
            .repository
            .books
            .update_first(title, |book| {
                book.available = true;
                if rating.is_some() {
                    book.rating = rating;
                }
                book.title.clone()
            })
            .ok_or_else(|| {
                debug!(title, "Return failed, no such book");
                AppError::NotFound(format!("book '{}'", title))
            })?;

        let new_balance = rating.map(|amount| self.update_balance(amount));
        info!(title = %stored_title, rating = ?rating, "Book returned");

        Ok(ReturnReceipt {
            title: stored_title,
            rating,
            new_balance,
        })
    }

    /// Add `amount` to the running balance and return the new total.
    pub fn update_balance(&self, amount: Decimal) -> Decimal {
        let balance = self.repository.ledger.credit(amount);
        info!(%amount, %balance, "Library balance updated");
        balance
    }

    /// Current balance.
    pub fn balance(&self) -> Decimal {
        self.repository.ledger.balance()
    }
}
