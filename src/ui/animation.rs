//! Wall-clock timelines that drive board animations.
//!
//! The board only knows linear progress in `[0, 1]`. A [`Timeline`] converts
//! elapsed time into that progress and tells the app when it has reached the
//! end, which is when the board's commit callback runs.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct Timeline {
    started_at: Instant,
    duration: Duration,
}

impl Timeline {
    pub fn start(started_at: Instant, duration: Duration) -> Self {
        Self { started_at, duration }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Linear progress at `now`, clamped to `[0, 1]`
    pub fn progress_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_finished_at(&self, now: Instant) -> bool {
        self.progress_at(now) >= 1.0
    }
}
