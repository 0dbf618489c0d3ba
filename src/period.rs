//! The reporting period used to scope aggregation.
//!
//! Aggregation never looks at the wall clock: callers always pass the year
//! and month they want a view of, which keeps the derived views
//! deterministic and testable.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::Error;

/// A year + month pair that scopes every aggregation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// The calendar year, e.g. 2024.
    pub year: i32,
    /// The calendar month, 1 (January) through 12 (December).
    pub month: u32,
}

impl Period {
    /// Create a reporting period for the given year and month.
    ///
    /// # Errors
    /// Returns [Error::Validation] if `month` is outside 1..=12.
    pub fn new(year: i32, month: u32) -> Result<Self, Error> {
        if !(1..=12).contains(&month) {
            return Err(Error::Validation(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }

        Ok(Self { year, month })
    }

    /// Whether `date` falls within this period.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// The `?year=&month=` query parameters selecting a reporting period.
///
/// Deserialized as-is from the query string; call [PeriodQuery::period] to
/// validate.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PeriodQuery {
    /// The calendar year.
    pub year: i32,
    /// The calendar month, 1 through 12.
    pub month: u32,
}

impl PeriodQuery {
    /// Validate the query parameters as a [Period].
    ///
    /// # Errors
    /// Returns [Error::Validation] if the month is outside 1..=12.
    pub fn period(&self) -> Result<Period, Error> {
        Period::new(self.year, self.month)
    }
}
