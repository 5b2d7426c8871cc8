//! Menu handlers for user management

use std::io::{BufRead, Write};

use crate::{
    error::{AppError, AppResult},
    menu::{Flow, Menu},
    models::CreateUser,
};

impl<R: BufRead, W: Write> Menu<R, W> {
    pub(crate) fn add_user(&mut self) -> AppResult<Flow> {
        let Some(name) = self.prompt("Enter user name")? else {
            return Ok(Flow::Quit);
        };
        let Some(email) = self.prompt("Enter user email")? else {
            return Ok(Flow::Quit);
        };

        self.services.users.add_user(CreateUser { name, email });
        Ok(Flow::Continue)
    }

    pub(crate) fn remove_user(&mut self) -> AppResult<Flow> {
        let Some(email) = self.prompt("Enter user email to remove")? else {
            return Ok(Flow::Quit);
        };

        match self.services.users.remove_user(&email) {
            Ok(_) => writeln!(self.writer, "Removed user: {}", email)?,
            Err(AppError::NotFound(_)) => writeln!(self.writer, "User not found: {}", email)?,
            Err(err) => return Err(err),
        }
        Ok(Flow::Continue)
    }
}
