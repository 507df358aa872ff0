//! Reason codes for input processing outcomes

use serde::{Deserialize, Serialize};

/// Why resonance moved (or didn't) on an input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum ReasonCode {
    // =========================================================================
    // R100: Signal
    // =========================================================================
    /// Blank input, nothing evaluated
    R100_EMPTY_INPUT,
    /// Input evaluated, no phrase or conjunction matched
    R101_NO_SIGNAL,
    /// Weights accumulated, sum below activation threshold
    R102_SIGNAL_ACCUMULATED,

    // =========================================================================
    // R110: Threshold
    // =========================================================================
    /// Sum reached threshold, φ boost applied (0.7 × φ > 1, so always clamped)
    R110_PHI_BOOST,
}

impl ReasonCode {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::R100_EMPTY_INPUT => "R100_EMPTY_INPUT",
            Self::R101_NO_SIGNAL => "R101_NO_SIGNAL",
            Self::R102_SIGNAL_ACCUMULATED => "R102_SIGNAL_ACCUMULATED",
            Self::R110_PHI_BOOST => "R110_PHI_BOOST",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::R100_EMPTY_INPUT => "Empty input",
            Self::R101_NO_SIGNAL => "No recognition signal",
            Self::R102_SIGNAL_ACCUMULATED => "Resonance accumulating",
            Self::R110_PHI_BOOST => "Threshold reached - golden ratio boost",
        }
    }

    /// Did the φ boost fire?
    pub fn is_boost(&self) -> bool {
        matches!(self, Self::R110_PHI_BOOST)
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}
