use alloc::format;
use alloc::string::String;
use core::time::Duration;
use web_time::Instant;

/// Monotonic game clock, running from the first reveal to the game-ending one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GameTimer {
    started_at: Option<Instant>,
    stopped_at: Option<Instant>,
}

impl GameTimer {
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    pub fn start_at(&mut self, now: Instant) {
        self.started_at = Some(now);
        self.stopped_at = None;
    }

    /// Freezes the clock; a timer that never started stays at zero.
    pub fn stop(&mut self) {
        self.stop_at(Instant::now());
    }

    pub fn stop_at(&mut self, now: Instant) {
        if self.is_running() {
            self.stopped_at = Some(now);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.stopped_at.is_none()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(Instant::now())
    }

    pub fn elapsed_at(&self, now: Instant) -> Duration {
        match self.started_at {
            Some(started_at) => self
                .stopped_at
                .unwrap_or(now)
                .saturating_duration_since(started_at),
            None => Duration::ZERO,
        }
    }
}

/// Formats whole seconds as `M:SS`.
pub fn format_elapsed(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
