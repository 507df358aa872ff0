//! Journey map types

use serde::Serialize;

/// One stage of the journey, unlocked at a resonance threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JourneyNode {
    pub id: usize,
    pub name: &'static str,
    pub description: &'static str,
    pub threshold: f64,
}

/// Where a resonance value sits on the journey
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JourneyProgress {
    /// resonance × 100
    pub percent: f64,
    /// Highest unlocked node
    pub current: Option<&'static JourneyNode>,
    /// Every unlocked node, in journey order
    pub active: Vec<&'static JourneyNode>,
}

impl JourneyProgress {
    pub fn is_active(&self, node: &JourneyNode) -> bool {
        self.active.iter().any(|n| n.id == node.id)
    }

    pub fn is_current(&self, node: &JourneyNode) -> bool {
        self.current.map(|n| n.id == node.id).unwrap_or(false)
    }
}
