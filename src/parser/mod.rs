//! Line-level parsing for ANS financial statement files
//!
//! The input files have no reliable schema, so parsing is positional and
//! forgiving:
//! - [`filter`] - Keyword gate deciding which lines are claims expenses
//! - [`record`] - Splits a data line into an [`ExpenseRecord`](crate::models::ExpenseRecord)
//! - [`value`] - Best-effort amount parsing for Brazilian and plain decimals
//!
//! ## Usage
//!
//! ```rust
//! use ans_claims_processor::models::FilePeriod;
//! use ans_claims_processor::parser::{extract_record, matches_claims_keywords};
//!
//! let period = FilePeriod::from_file_name("1T2024.csv");
//! let line = "2024-03-31;316458;411;EVENTOS/SINISTROS CONHECIDOS;0;1.234,56";
//!
//! assert!(matches_claims_keywords(line));
//! let record = extract_record(line, &period).unwrap();
//! assert_eq!(record.amount, 1234.56);
//! ```

pub mod filter;
pub mod record;
pub mod value;

pub use filter::matches_claims_keywords;
pub use record::{ExtractError, extract_record};
pub use value::parse_amount;
