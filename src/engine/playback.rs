//! Playback controller driving a cursor over a [`WordSequence`].
//!
//! The controller is a two-state machine. While `Running` it owns exactly
//! one armed [`Ticker`]; while `Idle` it owns none. The host event loop asks
//! [`PlaybackController::time_until_tick`] how long it may block and then
//! calls [`PlaybackController::on_timer`], which fires every overdue tick.
//! All mutations go through `&mut self`, so a tick never observes a half
//! applied seek, skip or rate change.
//!
//! Out-of-range requests (negative skips past the start, percentages above
//! 100, a zero rate) are clamped or ignored. Nothing here returns an error.

use crate::engine::timing::{wpm_to_interval, Ticker};
use crate::reading::WordSequence;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Idle,
    Running,
}

/// Read-only view of the playback state handed to the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub current_word: String,
    pub position: usize,
    pub length: usize,
    pub progress_percent: u8,
    /// Words after the current one.
    pub remaining_words: usize,
    pub estimated_minutes_remaining: u64,
    pub rate: u32,
    pub status: PlaybackStatus,
}

impl Snapshot {
    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Running
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_words == 0 && !self.is_playing()
    }
}

pub struct PlaybackController {
    words: WordSequence,
    position: usize,
    rate: u32,
    ticker: Option<Ticker>,
    subscribers: Vec<Sender<Snapshot>>,
}

impl PlaybackController {
    /// Starts `Idle` at the first word. A zero rate is raised to 1.
    pub fn new(words: WordSequence, rate: u32) -> Self {
        Self {
            words,
            position: 0,
            rate: rate.max(1),
            ticker: None,
            subscribers: Vec::new(),
        }
    }

    pub fn words(&self) -> &WordSequence {
        &self.words
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn rate(&self) -> u32 {
        self.rate
    }

    pub fn status(&self) -> PlaybackStatus {
        if self.ticker.is_some() {
            PlaybackStatus::Running
        } else {
            PlaybackStatus::Idle
        }
    }

    pub fn is_playing(&self) -> bool {
        self.ticker.is_some()
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.words.last_index()
    }

    /// Receives a snapshot after every change of position, rate or status.
    pub fn subscribe(&mut self) -> Receiver<Snapshot> {
        let (sender, receiver) = unbounded();
        self.subscribers.push(sender);
        receiver
    }

    fn publish(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        self.subscribers
            .retain(|subscriber| subscriber.send(snapshot.clone()).is_ok());
    }

    /// Flips between `Idle` and `Running`.
    ///
    /// Starting while on the last word is inert: there is nothing left to
    /// play, so the controller stays `Idle` and no timer is armed.
    pub fn toggle_play(&mut self, now: Instant) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play(now);
        }
    }

    pub fn play(&mut self, now: Instant) {
        if self.is_playing() {
            return;
        }
        if self.is_at_end() {
            debug!(position = self.position, "play requested on last word, ignoring");
            return;
        }
        self.ticker = Some(Ticker::arm(wpm_to_interval(self.rate), now));
        info!(position = self.position, rate = self.rate, "playback started");
        self.publish();
    }

    pub fn pause(&mut self) {
        if self.ticker.take().is_some() {
            info!(position = self.position, "playback paused");
            self.publish();
        }
    }

    /// One automatic advance. Reaching the last word ends playback. Does
    /// nothing while `Idle`.
    pub(crate) fn advance_tick(&mut self) {
        if !self.is_playing() {
            return;
        }
        if !self.is_at_end() {
            self.position += 1;
        }
        if self.is_at_end() {
            self.ticker = None;
            info!(length = self.words.len(), "reached end of document");
        }
        self.publish();
    }

    /// Fires every tick whose deadline is at or before `now`, in order, and
    /// returns how many fired. Does nothing while `Idle`.
    pub fn on_timer(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        while let Some(ticker) = self.ticker.as_mut() {
            if !ticker.is_due(now) {
                break;
            }
            ticker.reschedule();
            self.advance_tick();
            fired += 1;
        }
        fired
    }

    /// How long the host may wait before the next tick; `None` when idle.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker.map(|ticker| ticker.remaining(now))
    }

    fn move_to(&mut self, position: usize) {
        let position = position.min(self.words.last_index());
        if position != self.position {
            self.position = position;
            self.publish();
        }
    }

    /// Jumps `delta` words, clamped to the sequence bounds.
    pub fn skip(&mut self, delta: i64) {
        let last = self.words.last_index() as i64;
        let target = (self.position as i64).saturating_add(delta).clamp(0, last);
        self.move_to(target as usize);
    }

    /// Jumps to `floor(percent / 100 * length)`, with `percent` clamped to
    /// `0..=100`.
    pub fn seek_to_percent(&mut self, percent: i64) {
        let percent = percent.clamp(0, 100) as usize;
        self.move_to(percent * self.words.len() / 100);
    }

    /// Replaces the rate. While running the timer is re-armed at the new
    /// cadence from `now`; the current word is neither skipped nor repeated.
    pub fn set_rate(&mut self, rate: u32, now: Instant) {
        if rate == 0 {
            debug!("ignoring zero rate");
            return;
        }
        if rate == self.rate {
            return;
        }
        self.rate = rate;
        if self.ticker.is_some() {
            self.ticker = Some(Ticker::arm(wpm_to_interval(rate), now));
        }
        debug!(rate, "rate changed");
        self.publish();
    }

    pub fn snapshot(&self) -> Snapshot {
        let length = self.words.len();
        let remaining_words = length - self.position - 1;
        // The word on screen still has to be read, so it counts towards the ETA.
        let unread = (remaining_words + 1) as u64;
        let progress_percent = (self.position as f64 / length as f64 * 100.0).round() as u8;

        Snapshot {
            current_word: self.words.get(self.position).unwrap_or_default().to_string(),
            position: self.position,
            length,
            progress_percent,
            remaining_words,
            estimated_minutes_remaining: unread.div_ceil(u64::from(self.rate)),
            rate: self.rate,
            status: self.status(),
        }
    }

    /// Ends the session, releasing the timer and all subscribers whatever
    /// state playback is in.
    pub fn reset(self) {
        info!(
            position = self.position,
            running = self.is_playing(),
            "playback session closed"
        );
    }
}
