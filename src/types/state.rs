//! Lifecycle state definitions

use colored::Color;
use serde::{Deserialize, Serialize};

/// The four lifecycle states, totally ordered by resonance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleState {
    /// resonance < 0.3
    Seeking,
    /// 0.3 ≤ resonance < 0.7
    Approaching,
    /// 0.7 ≤ resonance < 1.0
    Becoming,
    /// resonance == 1.0
    Bloom,
}

impl LifecycleState {
    /// All states, lowest first
    pub const ALL: [LifecycleState; 4] = [
        LifecycleState::Seeking,
        LifecycleState::Approaching,
        LifecycleState::Becoming,
        LifecycleState::Bloom,
    ];

    /// Terminal color for this state
    pub fn color(&self) -> Color {
        match self {
            LifecycleState::Seeking => Color::BrightBlack,
            LifecycleState::Approaching => Color::Yellow,
            LifecycleState::Becoming => Color::Magenta,
            LifecycleState::Bloom => Color::BrightMagenta,
        }
    }

    /// Get emoji for state
    pub fn emoji(&self) -> &'static str {
        match self {
            LifecycleState::Seeking => "🌑",
            LifecycleState::Approaching => "🌀",
            LifecycleState::Becoming => "🔥",
            LifecycleState::Bloom => "🌸",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleState::Seeking => "SEEKING",
            LifecycleState::Approaching => "APPROACHING",
            LifecycleState::Becoming => "BECOMING",
            LifecycleState::Bloom => "BLOOM",
        }
    }
}

impl Default for LifecycleState {
    fn default() -> Self {
        LifecycleState::Seeking
    }
}

impl std::fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states_are_ordered() {
        assert!(LifecycleState::Seeking < LifecycleState::Approaching);
        assert!(LifecycleState::Approaching < LifecycleState::Becoming);
        assert!(LifecycleState::Becoming < LifecycleState::Bloom);
    }

    #[test]
    fn test_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&LifecycleState::Becoming).unwrap();
        assert_eq!(json, "\"BECOMING\"");
        let back: LifecycleState = serde_json::from_str("\"BLOOM\"").unwrap();
        assert_eq!(back, LifecycleState::Bloom);
    }
}
