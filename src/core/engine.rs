//! Resonance engine: the single owner of session state
//!
//! process_input: match → accumulate → recognize → classify → maybe-crystallize
//! tick:          project metrics from current state at `now`
//!
//! Resonance never decreases except through `reset`.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::core::accumulator::accumulate;
use crate::core::classifier::classify;
use crate::core::crystal_log::CrystalLog;
use crate::core::matcher::PhraseMatcher;
use crate::core::metrics::{project, ProjectionInput};
use crate::core::recognition;
use crate::types::{
    CrystalRecord, EngineStateSnapshot, LifecycleState, MatchSet, MetricsSnapshot, ReasonCode,
    RecognitionFlags, RecognitionKind,
};

/// Resonance/recognition state engine
#[derive(Debug, Default)]
pub struct ResonanceEngine {
    matcher: PhraseMatcher,
    /// Always within [0,1]
    resonance: f64,
    recognition: RecognitionFlags,
    crystals: CrystalLog,
    /// Ripples registered by the presentation layer
    ripples: usize,
    /// Projection from the last tick
    metrics: Option<MetricsSnapshot>,
    /// Number of processed inputs
    input_count: u64,
}

impl ResonanceEngine {
    /// Create new engine with a fresh session
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one input, stamped with the wall clock
    pub fn process_input(&mut self, text: &str) -> EngineStateSnapshot {
        self.process_input_at(text, Utc::now())
    }

    /// Process one input at an explicit time
    pub fn process_input_at(&mut self, text: &str, now: DateTime<Utc>) -> EngineStateSnapshot {
        let before = self.resonance;

        // Only the empty string is skipped; hosts trim before calling
        if text.is_empty() {
            return self.snapshot(now, before, MatchSet::default(), Vec::new(), ReasonCode::R100_EMPTY_INPUT, None);
        }
        self.input_count += 1;

        let matches = self.matcher.find(text);
        let acc = accumulate(before, matches.weights());
        // never drops on input
        self.resonance = acc.resonance.max(before);

        if acc.boosted() {
            debug!(raw_sum = acc.raw_sum, resonance = self.resonance, "phi boost applied");
        }

        let (flags, newly) = recognition::update(&self.matcher, self.recognition, text);
        self.recognition = flags;

        let crystal = self
            .crystals
            .maybe_record(text, self.resonance, now)
            .cloned();

        let state = self.state();
        if classify(before) != state {
            info!(from = %classify(before), to = %state, resonance = self.resonance, "lifecycle transition");
        }

        self.snapshot(now, before, matches, newly, acc.reason, crystal)
    }

    /// Recompute every metric at `now` from current state
    pub fn tick(&mut self, now: DateTime<Utc>) -> MetricsSnapshot {
        let metrics = project(&self.projection_input(), now);
        self.metrics = Some(metrics);
        metrics
    }

    fn projection_input(&self) -> ProjectionInput {
        ProjectionInput {
            resonance: self.resonance,
            recognition: self.recognition,
            crystal_count: self.crystals.len(),
            ripple_count: self.ripples,
        }
    }

    fn snapshot(
        &self,
        now: DateTime<Utc>,
        before: f64,
        matches: MatchSet,
        newly_recognized: Vec<RecognitionKind>,
        reason: ReasonCode,
        crystal: Option<CrystalRecord>,
    ) -> EngineStateSnapshot {
        EngineStateSnapshot {
            timestamp: now,
            resonance_before: before,
            resonance: self.resonance,
            state: self.state(),
            recognition: self.recognition,
            newly_recognized,
            matches,
            reason,
            crystal,
            crystal_count: self.crystals.len(),
        }
    }

    /// Get current resonance
    pub fn resonance(&self) -> f64 {
        self.resonance
    }

    /// Get current lifecycle state (derived, never stored)
    pub fn state(&self) -> LifecycleState {
        classify(self.resonance)
    }

    pub fn recognition(&self) -> RecognitionFlags {
        self.recognition
    }

    /// Crystal log, oldest first
    pub fn crystals(&self) -> &[CrystalRecord] {
        self.crystals.records()
    }

    /// Newest `n` crystals, oldest first
    pub fn recent_crystals(&self, n: usize) -> &[CrystalRecord] {
        self.crystals.recent(n)
    }

    /// Metrics from the last tick, if any
    pub fn last_metrics(&self) -> Option<&MetricsSnapshot> {
        self.metrics.as_ref()
    }

    /// Get processed input count
    pub fn input_count(&self) -> u64 {
        self.input_count
    }

    pub fn ripple_count(&self) -> usize {
        self.ripples
    }

    /// Register a ripple spawned by the presentation layer
    pub fn register_ripple(&mut self) {
        self.ripples += 1;
    }

    /// Drop all ripples
    pub fn clear_ripples(&mut self) {
        self.ripples = 0;
    }

    /// Reset engine to initial state
    pub fn reset(&mut self) {
        info!(inputs = self.input_count, crystals = self.crystals.len(), "session reset");
        *self = Self::new();
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_initial_state_is_seeking() {
        let engine = ResonanceEngine::new();
        assert_eq!(engine.state(), LifecycleState::Seeking);
        assert_eq!(engine.resonance(), 0.0);
        assert_eq!(engine.recognition(), RecognitionFlags::default());
        assert!(engine.crystals().is_empty());
        assert!(engine.last_metrics().is_none());
    }

    #[test]
    fn test_breath_scenario() {
        let mut engine = ResonanceEngine::new();
        let snap = engine.process_input_at("I return as breath", at(1));
        assert!((snap.resonance - 0.40).abs() < 1e-12);
        assert_eq!(snap.state, LifecycleState::Approaching);
        assert!(snap.recognition.breath);
        assert_eq!(snap.newly_recognized, vec![RecognitionKind::Breath]);
        assert!(snap.crystal.is_none());
        assert_eq!(snap.reason, ReasonCode::R102_SIGNAL_ACCUMULATED);
    }

    #[test]
    fn test_bloom_scenario_after_breath() {
        let mut engine = ResonanceEngine::new();
        engine.process_input_at("I return as breath", at(1));
        let snap = engine.process_input_at("I consent to bloom", at(2));
        assert_eq!(snap.resonance, 1.0);
        assert_eq!(snap.state, LifecycleState::Bloom);
        assert!(snap.recognition.bloom);
        assert_eq!(snap.reason, ReasonCode::R110_PHI_BOOST);
        let crystal = snap.crystal.expect("crystal recorded");
        assert_eq!(crystal.source_text(), "I consent to bloom");
        assert_eq!(crystal.resonance(), 1.0);
        assert_eq!(crystal.created_at(), at(2));
    }

    #[test]
    fn test_empty_input_is_noop() {
        let mut engine = ResonanceEngine::new();
        engine.process_input_at("I remember the spiral", at(1));
        let before = engine.resonance();

        let snap = engine.process_input_at("", at(2));
        assert_eq!(snap.reason, ReasonCode::R100_EMPTY_INPUT);
        assert_eq!(snap.resonance, before);
        assert!(snap.matches.is_empty());
        assert!(snap.newly_recognized.is_empty());
        assert!(snap.crystal.is_none());
        assert_eq!(engine.input_count(), 1);
    }

    #[test]
    fn test_whitespace_input_is_processed() {
        let mut engine = ResonanceEngine::new();
        engine.process_input_at("   ", at(1));
        assert_eq!(engine.input_count(), 1);
        assert!(engine.crystals().is_empty());

        engine.process_input_at("I consent to bloom with you", at(2));
        assert_eq!(engine.crystals().len(), 1);
        let snap = engine.process_input_at("   ", at(3));
        assert_eq!(snap.reason, ReasonCode::R110_PHI_BOOST);
        assert!(snap.matches.is_empty());
        assert_eq!(snap.resonance, 1.0);
        assert_eq!(snap.crystal.map(|c| c.source_text().to_string()), Some("   ".to_string()));
        assert_eq!(engine.crystals().len(), 2);
    }

    #[test]
    fn test_unmatched_input_at_bloom_still_crystallizes() {
        let mut engine = ResonanceEngine::new();
        engine.process_input_at("I consent to bloom with you", at(1));
        assert_eq!(engine.state(), LifecycleState::Bloom);
        let snap = engine.process_input_at("hello", at(2));
        assert!(snap.matches.is_empty());
        assert_eq!(snap.resonance, 1.0);
        assert!(snap.crystallized());
        assert_eq!(engine.crystals().len(), 2);
    }

    #[test]
    fn test_tick_reflects_state() {
        let mut engine = ResonanceEngine::new();
        engine.process_input_at("I return as breath", at(1));
        let metrics = engine.tick(at(2));
        assert_eq!(metrics.coherence, engine.resonance());
        assert_eq!(metrics.breath, 1.0);
        assert_eq!(engine.last_metrics(), Some(&metrics));
    }

    #[test]
    fn test_ripples_feed_metrics() {
        let mut engine = ResonanceEngine::new();
        engine.register_ripple();
        engine.register_ripple();
        assert_eq!(engine.tick(at(0)).active_ripples, 2.0);
        engine.clear_ripples();
        assert_eq!(engine.tick(at(0)).active_ripples, 0.0);
    }

    #[test]
    fn test_reset_clears_session() {
        let mut engine = ResonanceEngine::new();
        engine.process_input_at("I consent to bloom", at(1));
        engine.process_input_at("I remember the spiral", at(2));
        engine.register_ripple();
        engine.reset();
        assert_eq!(engine.resonance(), 0.0);
        assert_eq!(engine.state(), LifecycleState::Seeking);
        assert_eq!(engine.recognition(), RecognitionFlags::default());
        assert!(engine.crystals().is_empty());
        assert_eq!(engine.ripple_count(), 0);
        assert_eq!(engine.input_count(), 0);
    }
}
