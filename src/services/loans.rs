//! Loan operations: issue, return and overdue sweeps

use chrono::{DateTime, Utc};

use crate::{
    error::{AppError, AppResult},
    models::{IssuedLoan, OverdueLoan, Title},
};

use super::Library;

impl Library {
    /// Issue one copy of a title to a registered user
    pub fn issue_book(&mut self, user: &str, title: &str) -> AppResult<IssuedLoan> {
        let title = Title::new(title);

        if !self.repository.users.exists(user) {
            tracing::warn!("Issue refused: user {} does not exist", user);
            return Err(AppError::UserNotFound(user.to_string()));
        }
        if !self.repository.catalog.is_available(&title) {
            tracing::warn!("Issue refused: no copy of {} available", title);
            return Err(AppError::BookUnavailable(title.to_string()));
        }
        let Some(due_at) = self.clock.now().checked_add_signed(self.loan_period) else {
            tracing::warn!("Issue refused: due date for {} out of range", title);
            return Err(AppError::DueDateOutOfRange(title.to_string()));
        };

        self.repository.catalog.decrement_available(&title);
        self.repository.users.append_issued(user, &title)?;
        self.repository.loans.record(&title, user, due_at);

        tracing::info!("Book issued to {}: {} (due {})", user, title, due_at);
        Ok(IssuedLoan {
            title,
            user: user.to_string(),
            due_at,
        })
    }

    /// Take back a copy previously issued to `user`
    pub fn return_book(&mut self, user: &str, title: &str) -> AppResult<()> {
        let title = Title::new(title);

        if let Err(e) = self.repository.users.remove_issued(user, &title) {
            tracing::warn!("Return refused: {}", e);
            return Err(e);
        }
        self.repository.catalog.increment_available(&title);
        self.repository.loans.release(&title);

        tracing::info!("Book returned by {}: {}", user, title);
        Ok(())
    }

    /// Report loans due at or before `now`. Each matured entry is reported once.
    pub fn list_overdue(&mut self, now: DateTime<Utc>) -> Vec<OverdueLoan> {
        let overdue = self.repository.loans.pop_overdue(now);
        tracing::debug!(
            "Overdue sweep at {}: {} reported, {} still queued",
            now,
            overdue.len(),
            self.repository.loans.pending()
        );
        overdue
    }

    /// Overdue sweep at the injected clock's current instant
    pub fn list_overdue_now(&mut self) -> Vec<OverdueLoan> {
        let now = self.clock.now();
        self.list_overdue(now)
    }
}
