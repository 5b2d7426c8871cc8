//! Menu handlers for renting and returning

use std::io::{BufRead, Write};

use rust_decimal::Decimal;

use crate::{
    error::{AppError, AppResult},
    menu::{Flow, Menu},
};

impl<R: BufRead, W: Write> Menu<R, W> {
    pub(crate) fn rent_book(&mut self) -> AppResult<Flow> {
        let Some(title) = self.prompt("Enter title to rent")? else {
            return Ok(Flow::Quit);
        };
        let Some(email) = self.prompt("Enter user email")? else {
            return Ok(Flow::Quit);
        };

        match self.services.rentals.rent_book(&title, &email) {
            Ok(receipt) => {
                writeln!(self.writer, "Book '{}' rented successfully.", receipt.title)?;
                writeln!(self.writer, "Book '{}' rented by {}", title, receipt.renter)?;
            }
            Err(AppError::NotAvailable(stored_title)) => {
                writeln!(
                    self.writer,
                    "Book '{}' is not available for rent.",
                    stored_title
                )?;
            }
            Err(AppError::NotFound(_)) => {
                writeln!(self.writer, "Book or user not found.")?;
            }
            Err(err) => return Err(err),
        }
        Ok(Flow::Continue)
    }

    pub(crate) fn return_book(&mut self) -> AppResult<Flow> {
        let Some(title) = self.prompt("Enter title to return")? else {
            return Ok(Flow::Quit);
        };
        let Some(raw_rating) = self.prompt("Enter rating (optional, press Enter to skip)")? else {
            return Ok(Flow::Quit);
        };

        // Empty input means no rating; anything unparseable degrades to no
        // rating after the skip notice.
        let rating = if raw_rating.is_empty() {
            None
        } else {
            match raw_rating.parse::<Decimal>() {
                Ok(rating) => Some(rating),
                Err(_) => {
                    writeln!(self.writer, "Invalid rating. Skipping...")?;
                    None
                }
            }
        };

        match self.services.rentals.return_book(&title, rating) {
            Ok(receipt) => {
                if let Some(balance) = receipt.new_balance {
                    writeln!(
                        self.writer,
                        "Book '{}' returned successfully. Thank you for rating.",
                        receipt.title
                    )?;
                    writeln!(
                        self.writer,
                        "Library balance updated. Current balance: {}",
                        balance
                    )?;
                } else {
                    writeln!(self.writer, "Book '{}' returned successfully.", receipt.title)?;
                }
            }
            Err(AppError::NotFound(_)) => {
                writeln!(self.writer, "Book not found.")?;
            }
            Err(err) => return Err(err),
        }
        Ok(Flow::Continue)
    }
}
