//! Crystallization log: append-only, chronological

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::types::CrystalRecord;
use crate::THRESHOLD_ACTIVATION;

/// Append-only crystal log
#[derive(Debug, Clone, Default)]
pub struct CrystalLog {
    records: Vec<CrystalRecord>,
}

impl CrystalLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log `text` if `resonance` reached the activation threshold.
    /// Returns the new record, if one was appended.
    pub fn maybe_record(
        &mut self,
        text: &str,
        resonance: f64,
        now: DateTime<Utc>,
    ) -> Option<&CrystalRecord> {
        if resonance < THRESHOLD_ACTIVATION {
            return None;
        }
        self.records.push(CrystalRecord::new(text, resonance, now));
        debug!(count = self.records.len(), resonance, "crystal recorded");
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, oldest first
    pub fn records(&self) -> &[CrystalRecord] {
        &self.records
    }

    /// The newest `n` records, oldest first
    pub fn recent(&self, n: usize) -> &[CrystalRecord] {
        let start = self.records.len().saturating_sub(n);
        &self.records[start..]
    }
}
