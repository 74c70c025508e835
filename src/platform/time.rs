//! Frame pacing
//!
//! One tick per frame at a fixed rate. A late frame is not made up for:
//! the next deadline is measured from when the late frame actually ended.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FrameClock {
    frame: Duration,
    next: Instant,
    frames: u64,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self::starting_at(fps, Instant::now())
    }

    /// Clock whose first frame is due at `start`
    pub fn starting_at(fps: u32, start: Instant) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            next: start,
            frames: 0,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// True once the current frame's deadline has passed
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// When the next frame should run
    pub fn deadline(&self) -> Instant {
        self.next
    }

    /// Record a frame finished at `now` and schedule the next one.
    /// Returns how long to wait before it is due.
    pub fn finish_frame(&mut self, now: Instant) -> Duration {
        self.frames += 1;
        self.next = if self.next + self.frame > now {
            self.next + self.frame
        } else {
            // Behind schedule: no catch-up burst
            now + self.frame
        };
        self.next.saturating_duration_since(now)
    }
}
