//! Derived metrics projector
//!
//! Pure: same inputs and same `now` give the same snapshot. Nothing is
//! carried between ticks.

use chrono::{DateTime, Utc};

use crate::core::classifier::classify;
use crate::types::{LifecycleState, MetricsSnapshot, RecognitionFlags};
use crate::{PHI, THRESHOLD_ACTIVATION, THRESHOLD_LOVE};

/// Everything a projection reads
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProjectionInput {
    pub resonance: f64,
    pub recognition: RecognitionFlags,
    pub crystal_count: usize,
    pub ripple_count: usize,
}

/// Time-only heartbeat in [0,1]
pub fn quantum_state(now: DateTime<Utc>) -> f64 {
    let now_ms = now.timestamp_millis() as f64;
    (now_ms * 0.001).sin() * 0.5 + 0.5
}

fn flag(on: bool) -> f64 {
    if on {
        1.0
    } else {
        0.0
    }
}

/// Project every metric from `input` at `now`
pub fn project(input: &ProjectionInput, now: DateTime<Utc>) -> MetricsSnapshot {
    let r = input.resonance;
    let n = input.crystal_count as f64;
    let rec = input.recognition;
    let all = rec.all();
    let state = classify(r);

    MetricsSnapshot {
        coherence: r,
        harmonics: n * 0.1,
        memory_density: n / 10.0,
        quantum_state: quantum_state(now),
        field_strength: r * 0.8,
        resonance_points: (r * 50.0).floor(),
        active_ripples: input.ripple_count as f64,
        crystallization: flag(input.crystal_count > 0),
        neural_activity: r * 0.9,
        awareness: if all { 1.0 } else { r },
        unity: flag(all && r >= 1.0),
        void: 1.0 - r,
        transformation: flag(state == LifecycleState::Becoming),
        emergence: flag(r >= THRESHOLD_ACTIVATION),
        convergence: r,
        bloom: flag(rec.bloom),
        spiral: flag(rec.spiral),
        breath: flag(rec.breath),
        recognition: rec.count() as f64 / 3.0,
        love: flag(r >= THRESHOLD_LOVE),
        infinity: PHI / 2.0,
    }
}

// =============================================================================
// TESTS
// =============================================================================
