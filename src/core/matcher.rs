//! Phrase matcher: finds recognition phrases and keyword conjunctions
//!
//! Case-insensitive substring containment: the input is lowercased once and
//! searched for lowercased literals. No case folding, so "ſ" is not "s".
//! Every phrase and every conjunction is checked independently; an input can
//! score the same concept twice (phrase + conjunction), and that is kept.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::{Conjunction, MatchSet, MatchedSignal, RecognitionKind, SignalSource, SignalWeight};
use crate::{
    W_CONJ_BLOOM, W_CONJ_BREATH, W_CONJ_SPIRAL, W_PHRASE_BLOOM, W_PHRASE_BREATH,
    W_PHRASE_FELT, W_PHRASE_REAL, W_PHRASE_SPIRAL, W_PHRASE_WITH_YOU,
};

/// Phrase table, evaluation order
pub static PHRASE_TABLE: [SignalWeight; 6] = [
    SignalWeight { phrase: "I return as breath", weight: W_PHRASE_BREATH },
    SignalWeight { phrase: "I remember the spiral", weight: W_PHRASE_SPIRAL },
    SignalWeight { phrase: "I consent to bloom", weight: W_PHRASE_BLOOM },
    SignalWeight { phrase: "real", weight: W_PHRASE_REAL },
    SignalWeight { phrase: "felt", weight: W_PHRASE_FELT },
    SignalWeight { phrase: "with you", weight: W_PHRASE_WITH_YOU },
];

/// Conjunction table, evaluation order
pub static CONJUNCTIONS: [Conjunction; 3] = [
    Conjunction { kind: RecognitionKind::Breath, first: "return", second: "breath", weight: W_CONJ_BREATH },
    Conjunction { kind: RecognitionKind::Spiral, first: "remember", second: "spiral", weight: W_CONJ_SPIRAL },
    Conjunction { kind: RecognitionKind::Bloom, first: "consent", second: "bloom", weight: W_CONJ_BLOOM },
];

lazy_static! {
    static ref RE_PHRASES: Vec<Regex> = PHRASE_TABLE
        .iter()
        .map(|p| contains_pattern(p.phrase))
        .collect();

    static ref RE_CONJUNCTIONS: Vec<(Regex, Regex)> = CONJUNCTIONS
        .iter()
        .map(|c| (contains_pattern(c.first), contains_pattern(c.second)))
        .collect();
}

/// Literal substring pattern over lowercased text
pub(crate) fn contains_pattern(literal: &str) -> Regex {
    // Escaped literals always compile
    Regex::new(&regex::escape(&literal.to_lowercase())).expect("escaped literal is a valid regex")
}

/// Conjunctions satisfied by already-lowercased text, table order
fn conjunctions_in(lowered: &str) -> impl Iterator<Item = &'static Conjunction> + '_ {
    CONJUNCTIONS
        .iter()
        .zip(RE_CONJUNCTIONS.iter())
        .filter(move |(_, (a, b))| a.is_match(lowered) && b.is_match(lowered))
        .map(|(conj, _)| conj)
}

/// Phrase matcher over the fixed tables
#[derive(Debug, Default)]
pub struct PhraseMatcher;

impl PhraseMatcher {
    /// Create new matcher
    pub fn new() -> Self {
        Self
    }

    /// All matches in `text`: phrase table first, then conjunctions
    pub fn find(&self, text: &str) -> MatchSet {
        let lowered = text.to_lowercase();
        let mut signals = Vec::new();

        for (entry, re) in PHRASE_TABLE.iter().zip(RE_PHRASES.iter()) {
            if re.is_match(&lowered) {
                signals.push(MatchedSignal {
                    phrase: entry.phrase.to_string(),
                    weight: entry.weight,
                    source: SignalSource::Phrase,
                });
            }
        }

        for conj in conjunctions_in(&lowered) {
            signals.push(MatchedSignal {
                phrase: conj.label(),
                weight: conj.weight,
                source: SignalSource::Conjunction(conj.kind),
            });
        }

        MatchSet { signals }
    }

    /// Conjunctions satisfied by `text`, table order
    pub fn conjunctions(&self, text: &str) -> Vec<&'static Conjunction> {
        conjunctions_in(&text.to_lowercase()).collect()
    }

    /// Is the conjunction for `kind` satisfied by `text`?
    pub fn has_conjunction(&self, text: &str, kind: RecognitionKind) -> bool {
        self.conjunctions(text).iter().any(|c| c.kind == kind)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn phrases(set: &MatchSet) -> Vec<&str> {
        set.signals.iter().map(|s| s.phrase.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        let matcher = PhraseMatcher::new();
        assert!(matcher.find("").is_empty());
    }

    #[test]
    fn test_no_match() {
        let matcher = PhraseMatcher::new();
        let set = matcher.find("The sky is blue.");
        assert!(set.is_empty());
        assert_eq!(set.total_weight(), 0.0);
    }

    #[test]
    fn test_case_insensitive() {
        let matcher = PhraseMatcher::new();
        let set = matcher.find("i CONSENT TO BLOOM");
        assert_eq!(phrases(&set), vec!["I consent to bloom", "consent+bloom"]);
    }

    #[test]
    fn test_substring_not_word() {
        let matcher = PhraseMatcher::new();
        // "really" contains "real"
        let set = matcher.find("really");
        assert_eq!(phrases(&set), vec!["real"]);
        assert_eq!(set.total_weight(), 0.15);
    }

    #[test]
    fn test_phrase_and_conjunction_both_count() {
        let matcher = PhraseMatcher::new();
        let set = matcher.find("I return as breath");
        assert_eq!(set.len(), 2);
        assert_eq!(set.signals[0].source, SignalSource::Phrase);
        assert_eq!(
            set.signals[1].source,
            SignalSource::Conjunction(RecognitionKind::Breath)
        );
        assert!((set.total_weight() - 0.40).abs() < 1e-12);
    }

    #[test]
    fn test_conjunction_words_need_not_be_adjacent() {
        let matcher = PhraseMatcher::new();
        let set = matcher.find("Breath is what I return to");
        assert_eq!(phrases(&set), vec!["return+breath"]);
        assert!(matcher.has_conjunction("Breath is what I return to", RecognitionKind::Breath));
    }

    #[test]
    fn test_multiple_phrases_stack() {
        let matcher = PhraseMatcher::new();
        let set = matcher.find("It felt real with you");
        assert_eq!(phrases(&set), vec!["real", "felt", "with you"]);
        assert!((set.total_weight() - 0.50).abs() < 1e-12);
    }

    #[test]
    fn test_all_conjunctions_in_one_input() {
        let matcher = PhraseMatcher::new();
        let text = "return breath remember spiral consent bloom";
        let kinds: Vec<_> = matcher.find(text).conjunctions().collect();
        assert_eq!(
            kinds,
            vec![RecognitionKind::Breath, RecognitionKind::Spiral, RecognitionKind::Bloom]
        );
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let matcher = PhraseMatcher::new();
        assert!(matcher.find(".*+?()[]{}|^$\\").is_empty());
    }

    #[test]
    fn test_long_s_is_not_s() {
        let matcher = PhraseMatcher::new();
        // U+017F case-folds to "s" but lowercases to itself
        let set = matcher.find("I remember the \u{17F}piral");
        assert!(set.is_empty());
        assert!(!matcher.has_conjunction("I remember the \u{17F}piral", RecognitionKind::Spiral));
        assert!(matcher.find("\u{17F}PIRAL remember").is_empty());
    }

    #[test]
    fn test_uppercase_non_ascii_input() {
        let matcher = PhraseMatcher::new();
        let set = matcher.find("ÉTÉ, I RETURN AS BREATH");
        assert_eq!(phrases(&set), vec!["I return as breath", "return+breath"]);
    }
}
