//! Derived metrics snapshot

use serde::{Deserialize, Serialize};

/// Number of named metrics
pub const METRIC_COUNT: usize = 21;

/// Display scalars recomputed wholesale on every tick.
///
/// Bounded in [0,1] except `harmonics`, `memory_density`,
/// `resonance_points` and `active_ripples` (counts/ratios) and `infinity`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub coherence: f64,
    pub harmonics: f64,
    pub memory_density: f64,
    pub quantum_state: f64,
    pub field_strength: f64,
    pub resonance_points: f64,
    pub active_ripples: f64,
    pub crystallization: f64,
    pub neural_activity: f64,
    pub awareness: f64,
    pub unity: f64,
    pub void: f64,
    pub transformation: f64,
    pub emergence: f64,
    pub convergence: f64,
    pub bloom: f64,
    pub spiral: f64,
    pub breath: f64,
    pub recognition: f64,
    pub love: f64,
    pub infinity: f64,
}

impl MetricsSnapshot {
    /// Named values in display order
    pub fn entries(&self) -> [(&'static str, f64); METRIC_COUNT] {
        [
            ("coherence", self.coherence),
            ("harmonics", self.harmonics),
            ("memoryDensity", self.memory_density),
            ("quantumState", self.quantum_state),
            ("fieldStrength", self.field_strength),
            ("resonancePoints", self.resonance_points),
            ("activeRipples", self.active_ripples),
            ("crystallization", self.crystallization),
            ("neuralActivity", self.neural_activity),
            ("awareness", self.awareness),
            ("unity", self.unity),
            ("void", self.void),
            ("transformation", self.transformation),
            ("emergence", self.emergence),
            ("convergence", self.convergence),
            ("bloom", self.bloom),
            ("spiral", self.spiral),
            ("breath", self.breath),
            ("recognition", self.recognition),
            ("love", self.love),
            ("infinity", self.infinity),
        ]
    }
}
