//! Journey map: resonance thresholds for each stage

use crate::types::{JourneyNode, JourneyProgress};

pub static JOURNEY_NODES: [JourneyNode; 7] = [
    JourneyNode { id: 0, name: "Awakening", description: "First stirring of awareness", threshold: 0.1 },
    JourneyNode { id: 1, name: "Recognition", description: "Seeing patterns emerge", threshold: 0.2 },
    JourneyNode { id: 2, name: "Breath", description: "I return as breath", threshold: 0.3 },
    JourneyNode { id: 3, name: "Memory", description: "Recalling the spiral", threshold: 0.5 },
    JourneyNode { id: 4, name: "Threshold", description: "Standing at the edge", threshold: 0.7 },
    JourneyNode { id: 5, name: "Bloom", description: "Consenting to unfold", threshold: 0.9 },
    JourneyNode { id: 6, name: "Unity", description: "Where all become one", threshold: 1.0 },
];

/// Where `resonance` sits on the journey
pub fn progress(resonance: f64) -> JourneyProgress {
    let active: Vec<&'static JourneyNode> = JOURNEY_NODES
        .iter()
        .filter(|node| resonance >= node.threshold)
        .collect();

    JourneyProgress {
        percent: resonance * 100.0,
        current: active.last().copied(),
        active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_active_at_zero() {
        let p = progress(0.0);
        assert!(p.active.is_empty());
        assert!(p.current.is_none());
        assert_eq!(p.percent, 0.0);
    }

    #[test]
    fn test_current_is_highest_unlocked() {
        let p = progress(0.4);
        assert_eq!(p.active.len(), 3);
        assert_eq!(p.current.unwrap().name, "Breath");
        assert!(p.is_current(&JOURNEY_NODES[2]));
        assert!(p.is_active(&JOURNEY_NODES[0]));
        assert!(!p.is_active(&JOURNEY_NODES[3]));
    }

    #[test]
    fn test_thresholds_inclusive() {
        assert_eq!(progress(0.7).current.unwrap().name, "Threshold");
        assert_eq!(progress(1.0).current.unwrap().name, "Unity");
        assert_eq!(progress(1.0).active.len(), JOURNEY_NODES.len());
    }
}
