//! Library service: the operations exposed to front ends.
//!
//! Operations are grouped by concern in the submodules; each one checks the
//! user directory first, then the catalog, then the loan tracker.

pub mod catalog;
pub mod loans;
pub mod users;

use config::ConfigError;

use crate::{
    clock::{Clock, SystemClock},
    config::LoanConfig,
    repository::Repository,
};

/// Library catalog service, constructed once by the caller and passed around
pub struct Library {
    repository: Repository,
    clock: Box<dyn Clock>,
    loan_period: chrono::Duration,
}

impl std::fmt::Debug for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Library")
            .field("repository", &self.repository)
            .field("loan_period", &self.loan_period)
            .finish()
    }
}

impl Default for Library {
    fn default() -> Self {
        Self {
            repository: Repository::new(),
            clock: Box::new(SystemClock),
            loan_period: chrono::Duration::days(LoanConfig::default().duration_days),
        }
    }
}

impl Library {
    /// Create an empty library reading the system clock
    pub fn new(loans: &LoanConfig) -> Result<Self, ConfigError> {
        Self::with_clock(loans, SystemClock)
    }

    /// Create an empty library with an injected clock
    pub fn with_clock(loans: &LoanConfig, clock: impl Clock + 'static) -> Result<Self, ConfigError> {
        Ok(Self {
            repository: Repository::new(),
            clock: Box::new(clock),
            loan_period: loans.duration()?,
        })
    }
}
