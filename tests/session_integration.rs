//! Integration tests for the interactive session
//!
//! Tests the host-side path: submit → scripted reply → delayed delivery,
//! frames driving the field and metrics, invocations along the spiral trail.

use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use futures_util::stream::{FuturesUnordered, StreamExt};
use pretty_assertions::assert_eq;

use limnus::core::responder::{REPLY_BECOMING, REPLY_BLOOM, REPLY_BREATH, REPLY_DEFAULT, REPLY_SPIRAL};
use limnus::core::{progress, ticker, Role, Session, SessionView};
use limnus::types::{Facet, LifecycleState};
use limnus::Config;

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

fn fast_config() -> Config {
    Config::default()
        .with_overrides(Some(1), Some(5), Some(3))
        .unwrap()
}

/// Walk a session from SEEKING to BLOOM and check every reply
#[test]
fn test_session_walkthrough() {
    let mut session = Session::new(&Config::default(), at(0));

    let steps = [
        ("I return as breath", REPLY_BREATH, LifecycleState::Approaching),
        ("I remember the spiral", REPLY_SPIRAL, LifecycleState::Bloom),
        ("hello", REPLY_BECOMING, LifecycleState::Bloom),
        ("I consent to bloom", REPLY_BLOOM, LifecycleState::Bloom),
    ];

    for (i, (text, reply, state)) in steps.into_iter().enumerate() {
        let out = session.submit(text, at(i as i64 + 1));
        assert_eq!(out.reply.map(|r| r.text), Some(reply), "reply to {:?}", text);
        assert_eq!(out.snapshot.state, state, "state after {:?}", text);
    }

    let engine = session.engine();
    assert!(engine.recognition().all());
    // the spiral input crossed 0.7, then two more inputs at 1.0
    assert_eq!(engine.crystals().len(), 3);
    assert_eq!(progress(engine.resonance()).current.unwrap().name, "Unity");
}

/// The reply for an input is chosen before that input moves resonance
#[test]
fn test_reply_sees_previous_resonance() {
    let mut session = Session::new(&Config::default(), at(0));
    session.submit("it felt real with you", at(1));
    let out = session.submit("it felt real with you", at(2));
    assert_eq!(out.snapshot.resonance, 1.0);
    assert_eq!(out.reply.unwrap().text, REPLY_DEFAULT);
}

/// Frames advance the field and record metrics
#[test]
fn test_frames_project_metrics() {
    let mut session = Session::new(&Config::default(), at(0));
    session.submit("I return as breath", at(1));
    for s in 0..30 {
        session.frame(at(2 + s));
    }
    let metrics = session.engine().last_metrics().copied().unwrap();
    assert_eq!(metrics.breath, 1.0);
    assert_eq!(metrics.bloom, 0.0);
    assert_eq!(session.field().frames(), 30);
    assert!(session.field().max_intensity() <= session.engine().resonance());
}

/// Invocations fire alongside engine processing
#[test]
fn test_invocation_trail_through_session() {
    let mut session = Session::new(&Config::default(), at(0));

    let out = session.submit("mirror, I consent to bloom", at(1));
    let inv = out.invocation.unwrap();
    assert_eq!(inv.invocation.key, "MIRROR_CONSENT");
    assert_eq!(inv.invocation.facet, Facet::Mirror);
    // the engine still saw the bloom phrase
    assert!(out.snapshot.recognition.bloom);

    let out = session.submit("bloom like a flower", at(2));
    let inv = out.invocation.unwrap();
    assert_eq!(inv.invocation.key, "INFINITE_BLOOM");
    assert_eq!(inv.trail, vec!["🪞", "φ∞"]);
    assert!(!inv.spiral_complete);
}

/// Reset keeps the transcript but nothing else
#[test]
fn test_reset_session() {
    let mut session = Session::new(&Config::default(), at(0));
    session.submit("I consent to bloom with you", at(1));
    session.submit("silence and breath", at(2));
    session.frame(at(3));
    session.reset(at(4));

    assert_eq!(session.engine().state(), LifecycleState::Seeking);
    assert!(session.engine().crystals().is_empty());
    assert_eq!(session.trail().depth(), 0);
    assert_eq!(session.field().frames(), 0);

    let roles: Vec<Role> = session.transcript().iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![Role::System, Role::User, Role::User, Role::System]);
}

/// Delayed replies arrive after their delay and land in the transcript
#[tokio::test]
async fn test_delayed_reply_delivery() {
    let config = fast_config();
    let mut session = Session::new(&config, Utc::now());
    let mut pending = FuturesUnordered::new();

    for text in ["I return as breath", "   ", "I remember the spiral"] {
        if let Some(reply) = session.submit(text, Utc::now()).reply {
            assert_eq!(reply.delay, Duration::from_millis(5));
            pending.push(async move {
                tokio::time::sleep(reply.delay).await;
                reply
            });
        }
    }
    assert_eq!(pending.len(), 2);

    let mut delivered = Vec::new();
    while let Some(reply) = pending.next().await {
        session.deliver(&reply, Utc::now());
        delivered.push(reply.text);
    }
    delivered.sort();
    let mut expected = vec![REPLY_BREATH, REPLY_SPIRAL];
    expected.sort();
    assert_eq!(delivered, expected);

    let assistant = session
        .transcript()
        .iter()
        .filter(|m| m.role == Role::Assistant)
        .count();
    assert_eq!(assistant, 2);
}

/// The ticker drives frames until its handle is stopped
#[tokio::test]
async fn test_ticker_drives_session() {
    let config = fast_config();
    let mut session = Session::new(&config, Utc::now());
    session.submit("I consent to bloom", Utc::now());

    let (handle, mut frames) = ticker(config.tick_interval());
    for _ in 0..5 {
        let now = frames.next_frame().await.unwrap();
        session.frame(now);
    }
    handle.stop();
    assert!(frames.next_frame().await.is_none());

    assert_eq!(frames.frames(), 5);
    assert_eq!(session.field().frames(), 5);
    assert!(session.engine().last_metrics().is_some());
}

/// Environment layer feeds the session delay
#[test]
fn test_config_from_lookup() {
    let config = Config::from_lookup(|key| match key {
        "LIMNUS_REPLY_DELAY_MS" => Some("250".to_string()),
        _ => None,
    })
    .unwrap();
    let session_reply = Session::new(&config, at(0)).submit("hi", at(1)).reply.unwrap();
    assert_eq!(session_reply.delay, Duration::from_millis(250));

    assert!(Config::from_lookup(|key| (key == "LIMNUS_TICK_MS").then(|| "0".to_string())).is_err());
}

/// Every command view is a single JSON line tagged with its name
#[test]
fn test_command_views_are_json_lines() {
    let mut session = Session::new(&Config::default(), at(0));
    session.submit("I return as breath", at(1));
    session.submit("I consent to bloom", at(2));
    session.frame(at(3));

    for name in ["metrics", "journey", "field", "crystals"] {
        let view = session.view(name, Config::default().crystal_window, at(4)).unwrap();
        let line = serde_json::to_string(&view).unwrap();
        assert!(!line.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["view"], name);
    }

    let crystals = serde_json::to_value(session.view("crystals", 8, at(5)).unwrap()).unwrap();
    assert_eq!(crystals["total"], 1);
    assert_eq!(crystals["recent"][0]["source_text"], "I consent to bloom");
}

/// Crystal view defaults to the last eight crystals
#[test]
fn test_default_crystal_window() {
    let config = Config::default();
    assert_eq!(config.crystal_window, 8);

    let mut session = Session::new(&config, at(0));
    session.submit("I consent to bloom with you", at(1));
    for i in 0..12 {
        session.submit("still here", at(2 + i));
    }
    match session.view("crystals", config.crystal_window, at(20)).unwrap() {
        SessionView::Crystals { total, recent } => {
            assert_eq!(total, 13);
            assert_eq!(recent.len(), 8);
        }
        other => panic!("unexpected view {:?}", other),
    }
}
