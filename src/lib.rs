//! LIMNUS: resonance and recognition state engine
//!
//! text → PhraseMatcher → accumulate → RecognitionFlags → classify → CrystalLog
//! tick(now) → MetricsProjector

pub mod config;
pub mod core;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{LimnusError, Result};

// =============================================================================
// CONSTANTS [C]
// =============================================================================

/// Golden ratio, applied as the resonance boost
pub const PHI: f64 = 1.618033988749895;

/// Activation threshold: boost, crystallization and BECOMING all start here
pub const THRESHOLD_ACTIVATION: f64 = 0.7;

/// Lower bound of APPROACHING
pub const THRESHOLD_APPROACHING: f64 = 0.3;

/// Lower bound of BLOOM
pub const THRESHOLD_BLOOM: f64 = 1.0;

/// Resonance at or above which the `love` metric lights up
pub const THRESHOLD_LOVE: f64 = 0.8;

// =============================================================================
// PHRASE TABLE WEIGHTS [C]
// =============================================================================

pub const W_PHRASE_BREATH: f64 = 0.20;
pub const W_PHRASE_SPIRAL: f64 = 0.20;
pub const W_PHRASE_BLOOM: f64 = 0.30;
pub const W_PHRASE_REAL: f64 = 0.15;
pub const W_PHRASE_FELT: f64 = 0.15;
pub const W_PHRASE_WITH_YOU: f64 = 0.20;

// =============================================================================
// CONJUNCTION WEIGHTS [C] - stack on top of the phrase table
// =============================================================================

pub const W_CONJ_BREATH: f64 = 0.20;
pub const W_CONJ_SPIRAL: f64 = 0.20;
pub const W_CONJ_BLOOM: f64 = 0.30;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
