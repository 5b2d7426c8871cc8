//! Interactive menu front end
//!
//! Renders the 8-option menu, prompts for fields, dispatches to the
//! services, and formats every reported outcome. Generic over its input and
//! output streams so tests can drive complete sessions in-process.

mod books;
mod rentals;
mod users;

use std::io::{BufRead, Write};

use crate::{error::AppResult, services::Services};

/// Rendering of the "List All Books" output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ListFormat {
    /// One labeled line per book
    #[default]
    Text,
    /// Pretty-printed summary array
    Json,
}

/// Whether the session continues after a menu action. `Quit` comes from the
/// Exit option or from end of input mid-prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

pub struct Menu<R, W> {
    services: Services,
    reader: R,
    writer: W,
    format: ListFormat,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(services: Services, reader: R, writer: W, format: ListFormat) -> Self {
        Self {
            services,
            reader,
            writer,
            format,
        }
    }

    /// Run the session until Exit is chosen or the input stream ends.
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            self.render()?;
            let Some(choice) = self.prompt("Enter choice")? else {
                break;
            };
            let flow = match choice.as_str() {
                "1" => self.add_book()?,
                "2" => self.remove_book()?,
                "3" => self.list_books()?,
                "4" => self.rent_book()?,
                "5" => self.return_book()?,
                "6" => self.add_user()?,
                "7" => self.remove_user()?,
                "8" => Flow::Quit,
                _ => {
                    writeln!(self.writer, "Invalid choice. Try again.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    fn render(&mut self) -> AppResult<()> {
        writeln!(
            self.writer,
            "Menu\n1. Add Book\n2. Remove Book\n3. List All Books\n4. Rent Book\n5. Return Book\n6. Add User\n7. Remove User\n8. Exit"
        )?;
        Ok(())
    }

    /// Write `{label}: ` without a trailing newline, flush, and read one
    /// line. `None` means the input stream has ended.
    pub(crate) fn prompt(&mut self, label: &str) -> AppResult<Option<String>> {
        write!(self.writer, "{}: ", label)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}
