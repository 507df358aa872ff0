//! Session: the presentation-side bundle around one engine
//!
//! Owns the engine, responder, invocation trail, field and chat transcript.
//! Single owner; the host loop calls `submit`, `frame` and `deliver` in
//! strict sequence.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::Config;
use crate::core::classifier::lower_bound;
use crate::core::engine::ResonanceEngine;
use crate::core::field::{ResonanceField, SAMPLE_SIZE};
use crate::core::invocation::InvocationTrail;
use crate::core::journey::progress;
use crate::core::responder::{Responder, ScriptedReply, SESSION_GREETING};
use crate::types::{
    CrystalRecord, EngineStateSnapshot, InvocationOutcome, JourneyProgress, LifecycleState,
    MetricsSnapshot, RecognitionFlags,
};

/// Who said a transcript line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One line of the chat transcript
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Everything one submitted line produced
#[derive(Debug, Clone, Serialize)]
pub struct SubmitOutcome {
    pub snapshot: EngineStateSnapshot,
    /// Reply to deliver after `reply.delay`
    pub reply: Option<ScriptedReply>,
    pub invocation: Option<InvocationOutcome>,
}

/// The next lifecycle state and where it starts
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NextState {
    pub state: LifecycleState,
    pub at: f64,
}

/// Data behind one `:command`, rendered as text or JSON by the host
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum SessionView {
    Metrics {
        metrics: MetricsSnapshot,
        recognition: RecognitionFlags,
    },
    Journey {
        progress: JourneyProgress,
        next: Option<NextState>,
    },
    Field {
        frames: u64,
        phase: f64,
        mean_intensity: f64,
        sample: [[f64; SAMPLE_SIZE]; SAMPLE_SIZE],
    },
    Crystals {
        total: usize,
        recent: Vec<CrystalRecord>,
    },
}

#[derive(Debug)]
pub struct Session {
    engine: ResonanceEngine,
    responder: Responder,
    trail: InvocationTrail,
    field: ResonanceField,
    transcript: Vec<ChatMessage>,
}

impl Session {
    pub fn new(config: &Config, now: DateTime<Utc>) -> Self {
        Self {
            engine: ResonanceEngine::new(),
            responder: Responder::new(config.reply_delay()),
            trail: InvocationTrail::new(),
            field: ResonanceField::new(),
            transcript: vec![ChatMessage {
                role: Role::System,
                text: SESSION_GREETING.to_string(),
                timestamp: now,
            }],
        }
    }

    /// Feed one user line through the engine; the line is trimmed first
    pub fn submit(&mut self, text: &str, now: DateTime<Utc>) -> SubmitOutcome {
        let text = text.trim();
        let resonance_before = self.engine.resonance();
        let reply = self.responder.reply(text, resonance_before);

        if !text.is_empty() {
            self.transcript.push(ChatMessage {
                role: Role::User,
                text: text.to_string(),
                timestamp: now,
            });
        }

        let snapshot = self.engine.process_input_at(text, now);
        let invocation = self.trail.invoke(text);

        SubmitOutcome {
            snapshot,
            reply,
            invocation,
        }
    }

    /// One animation frame: advance the field, then tick the engine
    pub fn frame(&mut self, now: DateTime<Utc>) -> MetricsSnapshot {
        self.field.advance(self.engine.resonance());
        self.engine.tick(now)
    }

    /// Append a reply whose delay has elapsed
    pub fn deliver(&mut self, reply: &ScriptedReply, now: DateTime<Utc>) {
        self.transcript.push(ChatMessage {
            role: Role::Assistant,
            text: reply.text.to_string(),
            timestamp: now,
        });
    }

    /// Start over: new engine, trail and field; transcript keeps a marker
    pub fn reset(&mut self, now: DateTime<Utc>) {
        self.engine.reset();
        self.trail = InvocationTrail::new();
        self.field = ResonanceField::new();
        self.transcript.push(ChatMessage {
            role: Role::System,
            text: SESSION_GREETING.to_string(),
            timestamp: now,
        });
    }

    /// Build the view for `name` (`metrics`, `journey`, `field`, `crystals`).
    ///
    /// Metrics come from the last frame, or a fresh tick at `now` if none ran yet.
    pub fn view(&mut self, name: &str, crystal_window: usize, now: DateTime<Utc>) -> Option<SessionView> {
        let view = match name {
            "metrics" => {
                let metrics = match self.engine.last_metrics().copied() {
                    Some(m) => m,
                    None => self.engine.tick(now),
                };
                SessionView::Metrics {
                    metrics,
                    recognition: self.engine.recognition(),
                }
            }
            "journey" => {
                let state = self.engine.state();
                let next = LifecycleState::ALL
                    .iter()
                    .find(|s| **s > state)
                    .map(|s| NextState { state: *s, at: lower_bound(*s) });
                SessionView::Journey {
                    progress: progress(self.engine.resonance()),
                    next,
                }
            }
            "field" => SessionView::Field {
                frames: self.field.frames(),
                phase: self.field.phase(),
                mean_intensity: self.field.mean_intensity(),
                sample: self.field.sample(),
            },
            "crystals" => SessionView::Crystals {
                total: self.engine.crystals().len(),
                recent: self.engine.recent_crystals(crystal_window).to_vec(),
            },
            _ => return None,
        };
        Some(view)
    }

    pub fn engine(&self) -> &ResonanceEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut ResonanceEngine {
        &mut self.engine
    }

    pub fn field(&self) -> &ResonanceField {
        &self.field
    }

    pub fn trail(&self) -> &InvocationTrail {
        &self.trail
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }
}
