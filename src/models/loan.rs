//! Loan result types

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::book::Title;

/// A copy handed to a borrower
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuedLoan {
    pub title: Title,
    pub user: String,
    pub due_at: DateTime<Utc>,
}

/// Matured loan reported by an overdue sweep
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverdueLoan {
    pub title: Title,
    pub user: String,
}
