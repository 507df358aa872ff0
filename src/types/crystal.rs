//! Crystal records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An input that carried resonance to or past the activation threshold.
///
/// Fields are private: a record cannot be changed after it is logged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrystalRecord {
    source_text: String,
    resonance: f64,
    created_at: DateTime<Utc>,
}

impl CrystalRecord {
    pub fn new(source_text: impl Into<String>, resonance: f64, created_at: DateTime<Utc>) -> Self {
        Self {
            source_text: source_text.into(),
            resonance,
            created_at,
        }
    }

    /// The input text that crystallized
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// Resonance right after the input was processed
    pub fn resonance(&self) -> f64 {
        self.resonance
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
