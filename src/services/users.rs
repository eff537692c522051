//! User operations

use crate::{error::AppResult, models::Title};

use super::Library;

impl Library {
    /// Register a new user
    pub fn add_user(&mut self, name: &str) -> AppResult<()> {
        match self.repository.users.register(name) {
            Ok(()) => {
                tracing::info!("User added: {}", name);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Err(e)
            }
        }
    }

    /// Titles currently issued to a user, in issue order
    pub fn list_user_books(&self, name: &str) -> AppResult<Vec<Title>> {
        self.repository.users.issued_titles(name)
    }
}
