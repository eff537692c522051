//! Wall clock abstraction used for due dates and overdue sweeps

use chrono::{DateTime, Utc};
use std::{cell::Cell, rc::Rc};

/// Source of the current instant
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Settable clock. Clones share the same instant, so a test can keep a
/// handle and move time while the library holds another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    instant: Rc<Cell<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            instant: Rc::new(Cell::new(start)),
        }
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        self.instant.set(instant);
    }

    pub fn advance(&self, by: chrono::Duration) {
        self.instant.set(self.instant.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant.get()
    }
}
