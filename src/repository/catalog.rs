//! Catalog store: copy counts per title, plus the title prefix index

use std::collections::HashMap;

use crate::{
    error::{AppError, AppResult},
    index::PrefixIndex,
    models::{CatalogEntry, Title},
};

#[derive(Debug, Default)]
pub struct CatalogRepository {
    entries: HashMap<Title, CatalogEntry>,
    index: PrefixIndex,
}

impl CatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` copies of a title, creating the entry on first sight.
    ///
    /// Fails without touching the catalog if the total would overflow.
    pub fn add_copies(&mut self, title: &Title, count: u32) -> AppResult<CatalogEntry> {
        let current = self.get(title);
        let updated = current
            .total
            .checked_add(count)
            .zip(current.available.checked_add(count))
            .map(|(total, available)| CatalogEntry { total, available })
            .ok_or_else(|| AppError::CopyLimitExceeded(title.to_string()))?;

        self.index.insert(title);
        self.entries.insert(title.clone(), updated);
        Ok(updated)
    }

    /// Counts for a title; unknown titles read as zero
    pub fn get(&self, title: &Title) -> CatalogEntry {
        self.entries.get(title).copied().unwrap_or_default()
    }

    pub fn available_count(&self, title: &Title) -> u32 {
        self.get(title).available
    }

    pub fn is_available(&self, title: &Title) -> bool {
        self.available_count(title) > 0
    }

    /// Take one copy off the shelf. Returns false when none is available.
    pub fn decrement_available(&mut self, title: &Title) -> bool {
        match self.entries.get_mut(title) {
            Some(entry) if entry.available > 0 => {
                entry.available -= 1;
                true
            }
            _ => false,
        }
    }

    /// Put one copy back on the shelf, never above the total
    pub fn increment_available(&mut self, title: &Title) {
        if let Some(entry) = self.entries.get_mut(title) {
            if entry.available < entry.total {
                entry.available += 1;
            }
        }
    }

    /// Titles starting with `prefix`, case-insensitively
    pub fn search(&self, prefix: &str) -> Vec<Title> {
        self.index.search(prefix)
    }
}
