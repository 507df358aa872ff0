//! Tick driver: a fixed-rate frame clock with a caller-held stop handle
//!
//! `ticker()` returns a `TickHandle` and a `Ticker`. The ticker yields frame
//! timestamps until the handle is stopped or dropped; after that every
//! `next_frame` returns `None`.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::time::{self, Interval, MissedTickBehavior};
use tracing::debug;

/// Keeps the ticker running while held
#[derive(Debug)]
pub struct TickHandle {
    stop_tx: watch::Sender<bool>,
}

impl TickHandle {
    /// Stop the ticker now
    pub fn stop(self) {
        let _ = self.stop_tx.send(true);
    }
}

/// Frame clock
#[derive(Debug)]
pub struct Ticker {
    interval: Interval,
    stop_rx: watch::Receiver<bool>,
    running: bool,
    frames: u64,
}

/// Create a ticker firing every `period`. Must be called inside a tokio runtime.
pub fn ticker(period: Duration) -> (TickHandle, Ticker) {
    let (stop_tx, stop_rx) = watch::channel(false);
    let mut interval = time::interval(period);
    // Late frames are dropped, not bunched
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    (
        TickHandle { stop_tx },
        Ticker {
            interval,
            stop_rx,
            running: true,
            frames: 0,
        },
    )
}

impl Ticker {
    /// Wait for the next frame; `None` once stopped
    pub async fn next_frame(&mut self) -> Option<DateTime<Utc>> {
        if !self.running {
            return None;
        }
        if *self.stop_rx.borrow() {
            self.halt();
            return None;
        }

        let stopped = tokio::select! {
            biased;
            // Err means the handle was dropped
            _ = self.stop_rx.changed() => true,
            _ = self.interval.tick() => false,
        };

        if stopped {
            self.halt();
            return None;
        }
        self.frames += 1;
        Some(Utc::now())
    }

    fn halt(&mut self) {
        self.running = false;
        debug!(frames = self.frames, "ticker stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames delivered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_yields_frames_while_held() {
        let (_handle, mut ticker) = ticker(Duration::from_millis(5));
        for _ in 0..3 {
            assert!(ticker.next_frame().await.is_some());
        }
        assert_eq!(ticker.frames(), 3);
        assert!(ticker.is_running());
    }

    #[tokio::test]
    async fn test_stop_ends_stream() {
        let (handle, mut ticker) = ticker(Duration::from_millis(5));
        assert!(ticker.next_frame().await.is_some());
        handle.stop();
        assert!(ticker.next_frame().await.is_none());
        assert!(!ticker.is_running());
        assert!(ticker.next_frame().await.is_none());
    }

    #[tokio::test]
    async fn test_drop_ends_stream() {
        let (handle, mut ticker) = ticker(Duration::from_millis(5));
        drop(handle);
        assert!(ticker.next_frame().await.is_none());
        assert_eq!(ticker.frames(), 0);
    }

    #[tokio::test]
    async fn test_frame_times_advance() {
        let (_handle, mut ticker) = ticker(Duration::from_millis(5));
        let a = ticker.next_frame().await.unwrap();
        let b = ticker.next_frame().await.unwrap();
        assert!(b >= a);
    }
}
