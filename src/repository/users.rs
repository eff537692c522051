//! User directory: registered borrowers and their issued titles

use std::collections::HashMap;

use crate::{
    error::{AppError, AppResult},
    models::{Title, User},
};

#[derive(Debug, Default)]
pub struct UsersRepository {
    users: HashMap<String, User>,
}

impl UsersRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user; names are unique and case-sensitive
    pub fn register(&mut self, name: &str) -> AppResult<()> {
        if self.users.contains_key(name) {
            return Err(AppError::UserAlreadyExists(name.to_string()));
        }
        self.users.insert(name.to_string(), User::new(name));
        Ok(())
    }

    pub fn exists(&self, name: &str) -> bool {
        self.users.contains_key(name)
    }

    /// Get user by name
    pub fn get(&self, name: &str) -> AppResult<&User> {
        self.users
            .get(name)
            .ok_or_else(|| AppError::UserNotFound(name.to_string()))
    }

    pub fn append_issued(&mut self, name: &str, title: &Title) -> AppResult<()> {
        self.get_mut(name)?.issued.push(title.clone());
        Ok(())
    }

    /// Drop the first occurrence of `title` from the user's issued list
    pub fn remove_issued(&mut self, name: &str, title: &Title) -> AppResult<()> {
        if self.get_mut(name)?.take_back(title) {
            Ok(())
        } else {
            Err(AppError::NotIssuedToUser {
                user: name.to_string(),
                title: title.to_string(),
            })
        }
    }

    /// Titles issued to a user, in issue order
    pub fn issued_titles(&self, name: &str) -> AppResult<Vec<Title>> {
        Ok(self.get(name)?.issued.clone())
    }

    fn get_mut(&mut self, name: &str) -> AppResult<&mut User> {
        self.users
            .get_mut(name)
            .ok_or_else(|| AppError::UserNotFound(name.to_string()))
    }
}
