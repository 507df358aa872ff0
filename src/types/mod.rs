//! Core types for LIMNUS

mod state;
mod signals;
mod recognition;
mod crystal;
mod output;
mod metrics;
mod reason;
mod journey;
mod invocation;

pub use state::LifecycleState;
pub use signals::{SignalWeight, Conjunction, SignalSource, MatchedSignal, MatchSet};
pub use recognition::{RecognitionFlags, RecognitionKind};
pub use crystal::CrystalRecord;
pub use output::EngineStateSnapshot;
pub use metrics::{MetricsSnapshot, METRIC_COUNT};
pub use reason::ReasonCode;
pub use journey::{JourneyNode, JourneyProgress};
pub use invocation::{Facet, Invocation, InvocationOutcome};
