//! Catalog operations: adding and searching books

use crate::{
    error::AppResult,
    models::{BookAvailability, CatalogEntry, Title},
};

use super::Library;

impl Library {
    /// Add `count` copies of a title and return its updated counts
    pub fn add_book(&mut self, title: &str, count: u32) -> AppResult<CatalogEntry> {
        let title = Title::new(title);
        let entry = match self.repository.catalog.add_copies(&title, count) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("{}", e);
                return Err(e);
            }
        };
        tracing::info!(
            "Book added: {} (count: {}, total: {})",
            title,
            count,
            entry.total
        );
        Ok(entry)
    }

    /// Titles starting with `prefix`, with their available copies
    pub fn search_books(&self, prefix: &str) -> Vec<BookAvailability> {
        let results: Vec<BookAvailability> = self
            .repository
            .catalog
            .search(prefix)
            .into_iter()
            .map(|title| BookAvailability {
                available: self.repository.catalog.available_count(&title),
                title,
            })
            .collect();
        tracing::debug!("Search for {:?} matched {} title(s)", prefix, results.len());
        results
    }

    /// Counts for a single title; unknown titles read as zero
    pub fn book(&self, title: &str) -> CatalogEntry {
        self.repository.catalog.get(&Title::new(title))
    }
}
