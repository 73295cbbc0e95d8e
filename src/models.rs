//! Core data structures for claims-expense consolidation.
//!
//! Defines the consolidated record, the reporting period derived from an
//! input file name, and the composite key used to merge duplicates.

use crate::constants::{DEFAULT_QUARTER, DEFAULT_YEAR, KEY_SEPARATOR};
use std::fmt;

/// Reporting period of an input file, taken from its name
///
/// ANS files are named like `1T2024.csv`: the first two characters are the
/// quarter code and the next four the year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePeriod {
    pub quarter: String,
    pub year: String,
}

impl FilePeriod {
    pub fn new(quarter: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            quarter: quarter.into(),
            year: year.into(),
        }
    }

    /// Derive the period from a file name, falling back to `1T`/`2025` when
    /// the name is too short
    pub fn from_file_name(file_name: &str) -> Self {
        let chars: Vec<char> = file_name.chars().collect();

        let quarter = if chars.len() >= 2 {
            chars[..2].iter().collect::<String>().to_uppercase()
        } else {
            DEFAULT_QUARTER.to_string()
        };

        let year = if chars.len() >= 6 {
            chars[2..6].iter().collect()
        } else {
            DEFAULT_YEAR.to_string()
        };

        Self::new(quarter, year)
    }
}

impl fmt::Display for FilePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.quarter, self.year)
    }
}

/// One claims-expense line item
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRecord {
    /// Raw date column, not validated
    pub date: String,
    /// ANS registration of the reporting operator (REG_ANS)
    pub regulatory_id: String,
    /// Chart-of-accounts code
    pub account_code: String,
    pub description: String,
    pub quarter: String,
    pub year: String,
    /// Closing balance; zero and negative values are legitimate
    pub amount: f64,
}

impl ExpenseRecord {
    /// Key under which this record is consolidated
    pub fn consolidation_key(&self) -> ConsolidationKey {
        ConsolidationKey::new(
            &self.regulatory_id,
            &self.year,
            &self.quarter,
            &self.account_code,
        )
    }
}

/// Composite business key: regulatory id, year, quarter and account code
/// joined with `_`
///
/// The key is a plain concatenation, so records whose components differ only
/// in where an `_` falls map to the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConsolidationKey(String);

impl ConsolidationKey {
    pub fn new(regulatory_id: &str, year: &str, quarter: &str, account_code: &str) -> Self {
        let mut key = String::with_capacity(
            regulatory_id.len() + year.len() + quarter.len() + account_code.len() + 3,
        );
        for (index, part) in [regulatory_id, year, quarter, account_code]
            .into_iter()
            .enumerate()
        {
            if index > 0 {
                key.push(KEY_SEPARATOR);
            }
            key.push_str(part);
        }
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConsolidationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
