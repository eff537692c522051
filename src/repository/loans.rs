//! Loan store: due-date queue plus the current borrower of each title.
//!
//! Loans are tracked per title, not per copy. The borrower map keeps only the
//! most recent borrower of a title, and returning a book clears that mapping
//! without touching the queue. Queue entries are discarded lazily when an
//! overdue sweep reaches them, so an older due entry for a re-issued title is
//! attributed to the newer borrower.

use chrono::{DateTime, Utc};
use std::{cmp::Reverse, collections::BinaryHeap, collections::HashMap};

use crate::models::{OverdueLoan, Title};

#[derive(Debug, Default)]
pub struct LoansRepository {
    /// Min-ordered by (due date, title)
    due: BinaryHeap<Reverse<(DateTime<Utc>, Title)>>,
    borrowers: HashMap<Title, String>,
}

impl LoansRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a loan of `title` to `user`, due at `due_at`
    pub fn record(&mut self, title: &Title, user: &str, due_at: DateTime<Utc>) {
        self.borrowers.insert(title.clone(), user.to_string());
        self.due.push(Reverse((due_at, title.clone())));
    }

    /// Forget the current borrower of a title. The queue entry stays behind.
    pub fn release(&mut self, title: &Title) {
        self.borrowers.remove(title);
    }

    pub fn borrower(&self, title: &Title) -> Option<&str> {
        self.borrowers.get(title).map(String::as_str)
    }

    /// Pop every queue entry due at or before `now`.
    ///
    /// Entries whose title still has a borrower are reported; the rest are
    /// dropped. Either way a popped entry is never seen again.
    pub fn pop_overdue(&mut self, now: DateTime<Utc>) -> Vec<OverdueLoan> {
        let mut overdue = Vec::new();
        while self.due.peek().is_some_and(|Reverse((due_at, _))| *due_at <= now) {
            let Some(Reverse((_, title))) = self.due.pop() else {
                break;
            };
            match self.borrowers.get(&title) {
                Some(user) => overdue.push(OverdueLoan {
                    user: user.clone(),
                    title,
                }),
                None => tracing::debug!("Dropping stale due entry for returned title {}", title),
            }
        }
        overdue
    }

    /// Number of due entries still queued, stale ones included
    pub fn pending(&self) -> usize {
        self.due.len()
    }
}
