//! Signal structures for the phrase matcher

use serde::{Deserialize, Serialize};

use crate::types::RecognitionKind;

/// A fixed phrase and the weight it contributes when found
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalWeight {
    pub phrase: &'static str,
    pub weight: f64,
}

/// Two keywords that must both appear (anywhere) in the input
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Conjunction {
    /// Flag this conjunction raises
    pub kind: RecognitionKind,
    pub first: &'static str,
    pub second: &'static str,
    pub weight: f64,
}

impl Conjunction {
    /// Display label, e.g. "return+breath"
    pub fn label(&self) -> String {
        format!("{}+{}", self.first, self.second)
    }
}

/// Where a matched signal came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", content = "flag", rename_all = "snake_case")]
pub enum SignalSource {
    /// Phrase table entry
    Phrase,
    /// Keyword conjunction
    Conjunction(RecognitionKind),
}

/// One matched signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedSignal {
    /// Phrase text, or "a+b" for conjunctions
    pub phrase: String,
    pub weight: f64,
    pub source: SignalSource,
}

/// Every signal matched in one input, in evaluation order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchSet {
    pub signals: Vec<MatchedSignal>,
}

impl MatchSet {
    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    /// Weights in evaluation order
    pub fn weights(&self) -> impl Iterator<Item = f64> + '_ {
        self.signals.iter().map(|s| s.weight)
    }

    /// Sum of all weights (double-counted overlaps included)
    pub fn total_weight(&self) -> f64 {
        self.weights().sum()
    }

    /// Recognition kinds whose conjunction matched
    pub fn conjunctions(&self) -> impl Iterator<Item = RecognitionKind> + '_ {
        self.signals.iter().filter_map(|s| match s.source {
            SignalSource::Conjunction(kind) => Some(kind),
            SignalSource::Phrase => None,
        })
    }

    /// Did the conjunction for `kind` match?
    pub fn has_conjunction(&self, kind: RecognitionKind) -> bool {
        self.conjunctions().any(|k| k == kind)
    }
}
