//! Pacer - the timer-driven playback state machine
//!
//! Stopped -> Running on play: starts a statistics session and arms the first
//! tick one base interval out. Each tick looks at the unit about to be passed,
//! advances the reader and arms the next tick at base x pause multiplier, so
//! punctuation stretches exactly one interval. Pausing cancels the pending
//! tick and leaves everything else in place.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::engine::timer::{CancellableTimer, TimerHandle};
use crate::reading::timing::scaled_delay;
use crate::reading::{PauseKind, ReaderState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Running,
}

#[derive(Debug)]
pub struct Pacer {
    state: PlaybackState,
    timer: CancellableTimer,
    /// Handle of the tick this pacer armed last; anything else is stale
    pending: Option<TimerHandle>,
    /// Multiplier the pending tick was armed with
    pending_multiplier: f64,
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new()
    }
}

impl Pacer {
    pub fn new() -> Self {
        Self {
            state: PlaybackState::Stopped,
            timer: CancellableTimer::new(),
            pending: None,
            pending_multiplier: 1.0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == PlaybackState::Running
    }

    /// Starts playback. Returns false if already running or there is nothing
    /// to read.
    pub fn play(&mut self, now: Instant, reader: &mut ReaderState) -> bool {
        if self.is_running() || reader.is_empty() {
            return false;
        }
        self.state = PlaybackState::Running;
        reader.stats.start(now);
        self.arm(now, reader.wpm, 1.0);
        debug!(wpm = reader.wpm, index = reader.current_index, "playback started");
        true
    }

    /// Stops playback and cancels the pending tick.
    pub fn pause(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.state = PlaybackState::Stopped;
        self.timer.cancel();
        self.pending = None;
        debug!("playback paused");
        true
    }

    pub fn toggle(&mut self, now: Instant, reader: &mut ReaderState) -> PlaybackState {
        if self.is_running() {
            self.pause();
        } else {
            self.play(now, reader);
        }
        self.state
    }

    /// Re-arms the pending tick for a new speed, keeping its pause extension.
    pub fn speed_changed(&mut self, wpm: u32) {
        if !self.is_running() {
            return;
        }
        let delay = Duration::from_millis(scaled_delay(wpm, self.pending_multiplier));
        self.pending = self.timer.rearm(delay);
    }

    /// Fires the pending tick if it is due. Returns true when the reader
    /// advanced.
    pub fn poll(&mut self, now: Instant, reader: &mut ReaderState) -> bool {
        if !self.is_running() {
            return false;
        }
        match self.timer.poll(now) {
            Some(fired) if Some(fired) == self.pending => self.pending = None,
            _ => return false,
        }

        let pause = reader
            .current_unit()
            .map(PauseKind::of)
            .unwrap_or(PauseKind::None);

        if !reader.advance(now) {
            // Document went away underneath us
            self.state = PlaybackState::Stopped;
            return false;
        }

        let multiplier = pause.multiplier(reader.config());
        self.arm(now, reader.wpm, multiplier);
        true
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        let handle = self.pending?;
        self.timer
            .is_current(handle)
            .then(|| self.timer.deadline())
            .flatten()
    }

    fn arm(&mut self, now: Instant, wpm: u32, multiplier: f64) {
        self.pending_multiplier = multiplier;
        let delay = Duration::from_millis(scaled_delay(wpm, multiplier));
        self.pending = Some(self.timer.schedule(now, delay));
    }
}
