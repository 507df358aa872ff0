//! Resonance accumulator
//!
//! new = clamp(current + Σ weights), × φ whenever the pre-boost sum ≥ 0.7.
//! The boost fires on every qualifying call, not just the first crossing.

use crate::types::ReasonCode;
use crate::{PHI, THRESHOLD_ACTIVATION};

/// Result of one accumulation step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accumulation {
    /// current + Σ weights, before boost or clamp
    pub raw_sum: f64,
    /// Final resonance in [0,1]
    pub resonance: f64,
    pub reason: ReasonCode,
}

impl Accumulation {
    pub fn boosted(&self) -> bool {
        self.reason.is_boost()
    }
}

/// Fold `weights` into `current`
pub fn accumulate<I>(current: f64, weights: I) -> Accumulation
where
    I: IntoIterator<Item = f64>,
{
    let mut matched = false;
    let raw_sum = weights.into_iter().fold(current, |acc, w| {
        matched = true;
        acc + w
    });

    if raw_sum >= THRESHOLD_ACTIVATION {
        return Accumulation {
            raw_sum,
            resonance: clamp_resonance(raw_sum * PHI),
            reason: ReasonCode::R110_PHI_BOOST,
        };
    }

    let reason = if matched {
        ReasonCode::R102_SIGNAL_ACCUMULATED
    } else {
        ReasonCode::R101_NO_SIGNAL
    };
    Accumulation {
        raw_sum,
        resonance: clamp_resonance(raw_sum),
        reason,
    }
}

/// Keep resonance inside [0,1]; NaN collapses to 0
pub fn clamp_resonance(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}
