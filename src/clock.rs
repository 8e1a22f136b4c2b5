//! Time source for every date comparison made by the board.
//!
//! Nothing in the board reads the system clock directly; it asks a [`Clock`],
//! so tests can pin "today" to a fixed date.

use chrono::{Local, NaiveDate};

pub trait Clock: Send + Sync {
    /// The current calendar date, time of day discarded
    fn today(&self) -> NaiveDate;
}

/// Local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock frozen on one date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Build from a YYYY-MM-DD string
    pub fn parse(date_str: &str) -> Result<Self, chrono::ParseError> {
        crate::utils::datetime::parse_date(date_str).map(Self::new)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}
