//! Lifecycle classifier: resonance → state
//!
//! Bands checked highest first, lower bounds inclusive:
//! - r ≥ 1.0 → BLOOM
//! - r ≥ 0.7 → BECOMING
//! - r ≥ 0.3 → APPROACHING
//! - else    → SEEKING

use crate::types::LifecycleState;
use crate::{THRESHOLD_ACTIVATION, THRESHOLD_APPROACHING, THRESHOLD_BLOOM};

/// Classify a resonance value
pub fn classify(resonance: f64) -> LifecycleState {
    if resonance >= THRESHOLD_BLOOM {
        LifecycleState::Bloom
    } else if resonance >= THRESHOLD_ACTIVATION {
        LifecycleState::Becoming
    } else if resonance >= THRESHOLD_APPROACHING {
        LifecycleState::Approaching
    } else {
        LifecycleState::Seeking
    }
}

/// Lowest resonance that classifies as `state`
pub fn lower_bound(state: LifecycleState) -> f64 {
    match state {
        LifecycleState::Seeking => 0.0,
        LifecycleState::Approaching => THRESHOLD_APPROACHING,
        LifecycleState::Becoming => THRESHOLD_ACTIVATION,
        LifecycleState::Bloom => THRESHOLD_BLOOM,
    }
}
