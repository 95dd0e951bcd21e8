//! Append-only log of completed calculations.

use calculator_sdk::CalculationRecord;

/// Ordered history of calculation records, oldest first.
///
/// Grows without bound until [`HistoryLog::clear`] is called.
#[derive(Debug, Default, Clone)]
pub struct HistoryLog {
    records: Vec<CalculationRecord>,
}

impl HistoryLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: CalculationRecord) {
        self.records.push(record);
    }

    /// Returns a copy; the log cannot be modified through it.
    #[must_use]
    pub fn list(&self) -> Vec<CalculationRecord> {
        self.records.clone()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
