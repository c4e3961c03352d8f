//! Frame pacing
//!
//! The event loop sleeps until `next_deadline`, then runs one update and one
//! render. `begin_frame` reports the real time since the previous frame.

use std::time::{Duration, Instant};

use crate::consts::{MAX_FRAME_DT, TARGET_FPS};

#[derive(Debug, Clone)]
pub struct FrameClock {
    period: Duration,
    last_frame: Option<Instant>,
    next_deadline: Instant,
    frames: u64,
}

impl FrameClock {
    /// Clock targeting `target_fps` frames per second; 0 falls back to the default rate
    pub fn new(target_fps: u32, now: Instant) -> Self {
        let fps = if target_fps == 0 { TARGET_FPS } else { target_fps };
        Self {
            period: Duration::from_secs_f64(1.0 / f64::from(fps)),
            last_frame: None,
            next_deadline: now,
            frames: 0,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// When the next frame should run
    pub fn next_deadline(&self) -> Instant {
        self.next_deadline
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_deadline
    }

    /// Frames started so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Start a frame at `now`, returning the delta time in seconds.
    ///
    /// The first frame reports one period. Long stalls are capped at
    /// `MAX_FRAME_DT`. If the loop has fallen behind, the schedule restarts
    /// from `now` instead of bursting to catch up.
    pub fn begin_frame(&mut self, now: Instant) -> f32 {
        let dt = match self.last_frame {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => self.period.as_secs_f32(),
        };
        self.last_frame = Some(now);
        self.frames += 1;

        self.next_deadline += self.period;
        if self.next_deadline <= now {
            self.next_deadline = now + self.period;
        }

        dt.min(MAX_FRAME_DT)
    }
}
