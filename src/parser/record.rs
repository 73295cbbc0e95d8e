//! Positional extraction of expense records from data lines
//!
//! Lines are split naively on the delimiter (quoted delimiters are not
//! honoured). The delimiter is chosen per line: `;` when present, `,`
//! otherwise.

use crate::constants::input::{
    ACCOUNT_CODE_INDEX, AMOUNT_INDEX, DATE_INDEX, DESCRIPTION_INDEX, FALLBACK_DELIMITER,
    MIN_FIELDS, PRIMARY_DELIMITER, REGULATORY_ID_INDEX,
};
use crate::models::{ExpenseRecord, FilePeriod};
use thiserror::Error;

use super::value::parse_amount;

/// Reason a data line could not be turned into a record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("expected at least {expected} fields, found {found}")]
    TooFewFields { expected: usize, found: usize },
}

/// Delimiter used for one line
pub fn detect_delimiter(line: &str) -> char {
    if line.contains(PRIMARY_DELIMITER) {
        PRIMARY_DELIMITER
    } else {
        FALLBACK_DELIMITER
    }
}

/// Split a line into fields, dropping trailing empty fields
pub fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(detect_delimiter(line)).collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}

/// Build an [`ExpenseRecord`] from a data line of a file covering `period`
pub fn extract_record(line: &str, period: &FilePeriod) -> Result<ExpenseRecord, ExtractError> {
    let fields = split_fields(line);

    if fields.len() < MIN_FIELDS {
        return Err(ExtractError::TooFewFields {
            expected: MIN_FIELDS,
            found: fields.len(),
        });
    }

    let field = |index: usize| fields[index].trim().to_string();

    Ok(ExpenseRecord {
        date: field(DATE_INDEX),
        regulatory_id: field(REGULATORY_ID_INDEX),
        account_code: field(ACCOUNT_CODE_INDEX),
        description: field(DESCRIPTION_INDEX),
        quarter: period.quarter.clone(),
        year: period.year.clone(),
        amount: parse_amount(fields[AMOUNT_INDEX]),
    })
}
