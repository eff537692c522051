//! Registered borrower

use serde::Serialize;

use super::book::Title;

/// A registered user and the titles currently issued to them, in issue order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Case-sensitive, as entered
    pub name: String,
    pub issued: Vec<Title>,
}

impl User {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            issued: Vec::new(),
        }
    }

    /// Remove the first occurrence of `title`; false if it was not issued
    pub fn take_back(&mut self, title: &Title) -> bool {
        match self.issued.iter().position(|t| t == title) {
            Some(pos) => {
                self.issued.remove(pos);
                true
            }
            None => false,
        }
    }
}
