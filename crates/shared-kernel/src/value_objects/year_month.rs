// crates/shared-kernel/src/value_objects/year_month.rs
use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Calendar month an archive was released for.
///
/// Ordering is chronological, so comparisons work at month granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    /// First month whose archives include clock times.
    pub const CLOCK_DATA_SINCE: Self = Self::from_const(2017, 4);

    const fn from_const(year: i32, month: u32) -> Self {
        match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(date) => Self(date),
            None => panic!("invalid year-month constant"),
        }
    }

    pub fn new(year: i32, month: u32) -> DomainResult<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self)
            .ok_or_else(|| DomainError::InvalidYearMonth {
                value: format!("{year:04}-{month:02}"),
            })
    }

    /// Parses a strict `YYYY-MM` token.
    pub fn parse(value: &str) -> DomainResult<Self> {
        let invalid = || DomainError::InvalidYearMonth {
            value: value.to_string(),
        };

        let (year, month) = value.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4
            || month.len() != 2
            || !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self)
            .ok_or_else(invalid)
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Long month name and year, e.g. `April 2017`.
    pub fn label(self) -> String {
        self.0.format("%B %Y").to_string()
    }
}

impl FromStr for YearMonth {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}
