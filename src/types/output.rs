//! Output structures returned by the engine

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::types::{
    CrystalRecord, LifecycleState, MatchSet, ReasonCode, RecognitionFlags, RecognitionKind,
};

/// Immutable view of the engine after one `process_input`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineStateSnapshot {
    /// When the input was processed
    pub timestamp: DateTime<Utc>,
    /// Resonance before this input
    pub resonance_before: f64,
    /// Resonance after this input
    pub resonance: f64,
    /// Lifecycle state derived from `resonance`
    pub state: LifecycleState,
    /// Recognition flags after this input
    pub recognition: RecognitionFlags,
    /// Flags raised for the first time by this input
    pub newly_recognized: Vec<RecognitionKind>,
    /// Matched signals
    pub matches: MatchSet,
    /// Outcome of accumulation
    pub reason: ReasonCode,
    /// Crystal logged by this input, if any
    pub crystal: Option<CrystalRecord>,
    /// Log length after this input
    pub crystal_count: usize,
}

impl EngineStateSnapshot {
    /// Change in resonance caused by this input
    pub fn delta(&self) -> f64 {
        self.resonance - self.resonance_before
    }

    pub fn crystallized(&self) -> bool {
        self.crystal.is_some()
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let line = format!(
            "{} resonance={:.3} (+{:.3}) | state={} | crystals={} | {}",
            self.state.emoji(),
            self.resonance,
            self.delta(),
            self.state,
            self.crystal_count,
            self.reason.code(),
        );
        line.color(self.state.color()).to_string()
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "resonance={:.3} | state={} | crystals={} | reason={}",
            self.resonance,
            self.state,
            self.crystal_count,
            self.reason.code()
        )
    }
}
