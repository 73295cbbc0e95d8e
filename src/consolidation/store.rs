//! Keyed store that merges duplicate expense records
//!
//! Duplicates are resolved by magnitude: a record replaces the stored one
//! only when its absolute amount is strictly larger, on the assumption that
//! the larger value comes from the more complete filing. Equal magnitudes
//! keep the record seen first.

use crate::models::{ConsolidationKey, ExpenseRecord};
use std::collections::HashMap;
use tracing::debug;

use super::stats::RunStatistics;

/// What happened to a record handed to [`ConsolidationStore::consolidate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsolidateOutcome {
    /// First record for its key
    Inserted,
    /// Duplicate with a larger magnitude; it replaced the stored record
    Replaced(ConsolidationKey),
    /// Duplicate that lost to the stored record
    Kept(ConsolidationKey),
}

/// Consolidated records indexed by [`ConsolidationKey`]
///
/// Records live in a vector in first-insertion order; a replacement takes
/// over the slot of the record it replaces.
#[derive(Debug, Default)]
pub struct ConsolidationStore {
    index: HashMap<ConsolidationKey, usize>,
    records: Vec<ExpenseRecord>,
}

impl ConsolidationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a record into the store, updating `stats`
    pub fn consolidate(
        &mut self,
        record: ExpenseRecord,
        stats: &mut RunStatistics,
    ) -> ConsolidateOutcome {
        stats.record_amount(record.amount);

        let key = record.consolidation_key();
        match self.index.get(&key) {
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(record);
                ConsolidateOutcome::Inserted
            }
            Some(&slot) => {
                stats.duplicates += 1;
                let existing = &mut self.records[slot];
                if record.amount.abs() > existing.amount.abs() {
                    debug!(
                        "Replacing {} amount {} with {}",
                        key, existing.amount, record.amount
                    );
                    *existing = record;
                    ConsolidateOutcome::Replaced(key)
                } else {
                    ConsolidateOutcome::Kept(key)
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in first-insertion order
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ExpenseRecord> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(regulatory_id: &str, account_code: &str, amount: f64) -> ExpenseRecord {
        ExpenseRecord {
            date: "2024-03-31".to_string(),
            regulatory_id: regulatory_id.to_string(),
            account_code: account_code.to_string(),
            description: "EVENTOS/SINISTROS CONHECIDOS".to_string(),
            quarter: "1T".to_string(),
            year: "2024".to_string(),
            amount,
        }
    }

    #[test]
    fn test_distinct_keys_are_inserted() {
        let mut store = ConsolidationStore::new();
        let mut stats = RunStatistics::new();

        for (regulatory_id, account_code) in [("1", "411"), ("2", "411"), ("1", "412")] {
            let outcome = store.consolidate(record(regulatory_id, account_code, 10.0), &mut stats);
            assert_eq!(outcome, ConsolidateOutcome::Inserted);
        }

        assert_eq!(store.len(), 3);
        assert_eq!(stats.duplicates, 0);
    }

    #[test]
    fn test_larger_magnitude_replaces() {
        let mut store = ConsolidationStore::new();
        let mut stats = RunStatistics::new();

        store.consolidate(record("1", "411", 30.0), &mut stats);
        let outcome = store.consolidate(record("1", "411", -50.0), &mut stats);

        let key = record("1", "411", 0.0).consolidation_key();
        assert_eq!(outcome, ConsolidateOutcome::Replaced(key));
        assert_eq!(store.records()[0].amount, -50.0);
        assert_eq!(stats.duplicates, 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_smaller_magnitude_is_kept_out() {
        let mut store = ConsolidationStore::new();
        let mut stats = RunStatistics::new();

        store.consolidate(record("1", "411", -50.0), &mut stats);
        let outcome = store.consolidate(record("1", "411", 30.0), &mut stats);

        let key = record("1", "411", 0.0).consolidation_key();
        assert_eq!(outcome, ConsolidateOutcome::Kept(key));
        assert_eq!(store.records()[0].amount, -50.0);
        assert_eq!(stats.duplicates, 1);
        assert_eq!(stats.negative_values, 1);
    }

    #[test]
    fn test_equal_magnitude_keeps_first() {
        let mut store = ConsolidationStore::new();
        let mut stats = RunStatistics::new();

        let mut first = record("1", "411", 25.0);
        first.description = "first".to_string();
        let mut second = record("1", "411", -25.0);
        second.description = "second".to_string();

        store.consolidate(first.clone(), &mut stats);
        let outcome = store.consolidate(second, &mut stats);

        assert_eq!(outcome, ConsolidateOutcome::Kept(first.consolidation_key()));
        assert_eq!(store.records(), &[first]);
        assert_eq!(stats.duplicates, 1);
    }

    #[test]
    fn test_identical_record_is_idempotent_but_counted() {
        let mut store = ConsolidationStore::new();
        let mut stats = RunStatistics::new();
        let original = record("1", "411", 99.9);

        store.consolidate(original.clone(), &mut stats);
        store.consolidate(original.clone(), &mut stats);
        store.consolidate(original.clone(), &mut stats);

        assert_eq!(store.records(), &[original]);
        assert_eq!(stats.duplicates, 2);
    }

    #[test]
    fn test_replacement_keeps_insertion_slot() {
        let mut store = ConsolidationStore::new();
        let mut stats = RunStatistics::new();

        store.consolidate(record("A", "411", 1.0), &mut stats);
        store.consolidate(record("B", "411", 1.0), &mut stats);
        store.consolidate(record("A", "411", 100.0), &mut stats);

        let ids: Vec<&str> = store
            .records()
            .iter()
            .map(|r| r.regulatory_id.as_str())
            .collect();
        assert_eq!(ids, vec!["A", "B"]);
        assert_eq!(store.records()[0].amount, 100.0);
    }

    #[test]
    fn test_zero_and_negative_counted_for_every_record() {
        let mut store = ConsolidationStore::new();
        let mut stats = RunStatistics::new();

        store.consolidate(record("1", "411", 0.0), &mut stats);
        store.consolidate(record("1", "411", 0.0), &mut stats);
        store.consolidate(record("2", "411", -1.0), &mut stats);

        assert_eq!(stats.zero_values, 2);
        assert_eq!(stats.negative_values, 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_date_and_description_do_not_split_keys() {
        let mut store = ConsolidationStore::new();
        let mut stats = RunStatistics::new();

        let mut other = record("1", "411", 5.0);
        other.date = "2024-01-01".to_string();
        other.description = "Sinistros avisados".to_string();

        store.consolidate(record("1", "411", 1.0), &mut stats);
        store.consolidate(other.clone(), &mut stats);

        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0], other);
    }
}
