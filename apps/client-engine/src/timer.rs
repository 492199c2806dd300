//! Countdown for the timed reaction phase.
//!
//! The shell owns wall-clock time and drives the countdown with one call per
//! second; everything here is deterministic. The `sent` flag is the one-shot
//! guard shared by auto-expiry and manual submission so the two paths cannot
//! both fire.

/// Used when the phase args carry no usable duration. The server-supplied
/// value is canonical whenever present.
pub const REACTION_FALLBACK_SECS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTick {
    /// No countdown armed.
    Idle,
    /// Still counting; the new remaining seconds.
    Running(u32),
    /// Reached zero on this tick. Reported exactly once per arming.
    Expired,
}

#[derive(Debug, Default)]
pub struct ReactionTimer {
    remaining: Option<u32>,
    sent: bool,
}

impl ReactionTimer {
    /// Arm the countdown. Starting while already running is a no-op.
    pub fn start(&mut self, secs: u32) {
        if self.remaining.is_none() {
            self.remaining = Some(secs.max(1));
        }
    }

    /// Advance by one second.
    pub fn tick(&mut self) -> TimerTick {
        match self.remaining {
            None => TimerTick::Idle,
            Some(secs) => {
                let left = secs.saturating_sub(1);
                if left == 0 {
                    self.remaining = None;
                    TimerTick::Expired
                } else {
                    self.remaining = Some(left);
                    TimerTick::Running(left)
                }
            }
        }
    }

    /// First caller wins; every later call reports false. Set by both the
    /// auto-fire path and manual submission.
    pub fn try_mark_sent(&mut self) -> bool {
        if self.sent {
            false
        } else {
            self.sent = true;
            true
        }
    }

    /// Stop the countdown but keep the one-shot guard. Used after a manual
    /// submission: the auto path must stay dead until the phase resets.
    pub fn stop_countdown(&mut self) {
        self.remaining = None;
    }

    /// Clear the countdown and reset the one-shot guard. Called on phase
    /// exit and eligibility loss.
    pub fn cancel(&mut self) {
        self.remaining = None;
        self.sent = false;
    }

    pub fn is_running(&self) -> bool {
        self.remaining.is_some()
    }

    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }
}
