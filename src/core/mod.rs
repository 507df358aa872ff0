//! Core modules for LIMNUS

pub mod matcher;
pub mod accumulator;
pub mod classifier;
pub mod recognition;
pub mod crystal_log;
pub mod metrics;
pub mod engine;
pub mod responder;
pub mod invocation;
pub mod journey;
pub mod field;
pub mod ticker;
pub mod session;

pub use matcher::{PhraseMatcher, PHRASE_TABLE, CONJUNCTIONS};
pub use accumulator::{accumulate, clamp_resonance, Accumulation};
pub use classifier::{classify, lower_bound};
pub use crystal_log::CrystalLog;
pub use metrics::{project, ProjectionInput};
pub use engine::ResonanceEngine;
pub use responder::{Responder, ScriptedReply};
pub use invocation::{detect, InvocationTrail, INVOCATIONS};
pub use journey::{progress, JOURNEY_NODES};
pub use field::ResonanceField;
pub use ticker::{ticker, TickHandle, Ticker};
pub use session::{ChatMessage, NextState, Role, Session, SessionView, SubmitOutcome};
