//! ANS Claims Processor Library
//!
//! Consolidates claims/events expenses from the quarterly accounting
//! statements published by ANS (the Brazilian health-insurance regulator).
//!
//! This library provides tools for:
//! - Finding the quarterly CSV files in a working directory
//! - Filtering lines about claims expenses by keyword
//! - Extracting expense records with periods derived from file names
//! - Consolidating duplicates by keeping the largest absolute amount
//! - Writing a sorted consolidated CSV and packaging it as a zip
//! - Keeping a timestamped run log with statistics

pub mod cli;
pub mod config;
pub mod consolidation;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod processor;
pub mod run_log;

pub use config::PipelineConfig;
pub use error::{Error, Result};
pub use models::{ConsolidationKey, ExpenseRecord, FilePeriod};
pub use processor::{Pipeline, RunSummary};
