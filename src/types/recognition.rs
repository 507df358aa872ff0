//! Recognition flags

use serde::{Deserialize, Serialize};

/// The three recognition milestones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecognitionKind {
    /// return + breath
    Breath,
    /// remember + spiral
    Spiral,
    /// consent + bloom
    Bloom,
}

impl RecognitionKind {
    pub const ALL: [RecognitionKind; 3] = [
        RecognitionKind::Breath,
        RecognitionKind::Spiral,
        RecognitionKind::Bloom,
    ];

    /// Label used on the metrics screen
    pub fn label(&self) -> &'static str {
        match self {
            RecognitionKind::Breath => "Breath Return",
            RecognitionKind::Spiral => "Spiral Memory",
            RecognitionKind::Bloom => "Bloom Consent",
        }
    }
}

impl std::fmt::Display for RecognitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RecognitionKind::Breath => "breath",
            RecognitionKind::Spiral => "spiral",
            RecognitionKind::Bloom => "bloom",
        };
        write!(f, "{}", name)
    }
}

/// Monotonic recognition flags: once set, never cleared within a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionFlags {
    pub breath: bool,
    pub spiral: bool,
    pub bloom: bool,
}

impl RecognitionFlags {
    pub fn get(&self, kind: RecognitionKind) -> bool {
        match kind {
            RecognitionKind::Breath => self.breath,
            RecognitionKind::Spiral => self.spiral,
            RecognitionKind::Bloom => self.bloom,
        }
    }

    /// Raise a flag. Returns true if it was not already set.
    pub fn raise(&mut self, kind: RecognitionKind) -> bool {
        let slot = match kind {
            RecognitionKind::Breath => &mut self.breath,
            RecognitionKind::Spiral => &mut self.spiral,
            RecognitionKind::Bloom => &mut self.bloom,
        };
        let newly = !*slot;
        *slot = true;
        newly
    }

    /// Number of raised flags (0-3)
    pub fn count(&self) -> usize {
        RecognitionKind::ALL.iter().filter(|k| self.get(**k)).count()
    }

    pub fn all(&self) -> bool {
        self.breath && self.spiral && self.bloom
    }
}
