//! Menu handlers for catalog management

use std::io::{BufRead, Write};

use crate::{
    error::{AppError, AppResult},
    menu::{Flow, ListFormat, Menu},
    models::CreateBook,
};

impl<R: BufRead, W: Write> Menu<R, W> {
    pub(crate) fn add_book(&mut self) -> AppResult<Flow> {
        let Some(title) = self.prompt("Title")? else {
            return Ok(Flow::Quit);
        };
        let Some(author_name) = self.prompt("Author Name")? else {
            return Ok(Flow::Quit);
        };
        let Some(category) = self.prompt("Category")? else {
            return Ok(Flow::Quit);
        };

        self.services.catalog.add_book(CreateBook {
            title,
            author_name,
            category,
        });
        Ok(Flow::Continue)
    }

    pub(crate) fn remove_book(&mut self) -> AppResult<Flow> {
        let Some(title) = self.prompt("Enter title to remove")? else {
            return Ok(Flow::Quit);
        };

        // Echoes the title as typed, not the stored casing.
        match self.services.catalog.remove_book(&title) {
            Ok(_) => writeln!(self.writer, "Removed: {}", title)?,
            Err(AppError::NotFound(_)) => writeln!(self.writer, "Not found: {}", title)?,
            Err(err) => return Err(err),
        }
        Ok(Flow::Continue)
    }

    pub(crate) fn list_books(&mut self) -> AppResult<Flow> {
        let books = self.services.catalog.list_books();
        match self.format {
            ListFormat::Text => {
                writeln!(self.writer, "Books in the Library:")?;
                for book in &books {
                    writeln!(
                        self.writer,
                        "Title: {}, Author: {}, Category: {}, Available: {}",
                        book.title, book.author, book.category, book.available
                    )?;
                }
            }
            ListFormat::Json => {
                let rendered =
                    serde_json::to_string_pretty(&books).map_err(std::io::Error::from)?;
                writeln!(self.writer, "{}", rendered)?;
            }
        }
        Ok(Flow::Continue)
    }
}
