//! Consolidation of claims-expense records
//!
//! - [`store`] - Keyed store applying the max-magnitude duplicate policy
//! - [`stats`] - Run and per-file counters

pub mod stats;
pub mod store;

pub use stats::{FileStats, RunStatistics};
pub use store::{ConsolidateOutcome, ConsolidationStore};
