//! Frame timing and fixed-timestep distance scaling

use std::time::Instant;

/// Measures elapsed time between frames and converts nominal speed
/// units into frame-rate-independent pixel distances.
///
/// A stalled frame is not clamped: the next step covers the full
/// measured delta in one proportionally larger move.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_time: Instant,
    current_time: Instant,
    /// Last frame delta in milliseconds
    pub dt_ms: f32,
    /// Last frame delta in seconds
    pub dt_secs: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_time: now,
            current_time: now,
            dt_ms: 0.0,
            dt_secs: 0.0,
        }
    }

    /// Record the current time and compute the delta since the
    /// previous tick. `Instant` is monotonic, so the delta is never
    /// negative.
    pub fn tick(&mut self) {
        self.last_time = self.current_time;
        self.current_time = Instant::now();
        let elapsed = self.current_time.duration_since(self.last_time);
        self.dt_ms = elapsed.as_secs_f32() * 1000.0;
        self.dt_secs = elapsed.as_secs_f32();
        log::trace!("frame dt {:.3} ms", self.dt_ms);
    }

    /// Pixels to move this frame for a nominal speed unit: a speed of
    /// 6 always yields 600 pixels/second regardless of frame rate.
    pub fn distance_for(&self, speed_unit: f32) -> f32 {
        speed_unit * 100.0 * self.dt_secs
    }

    /// Clock with a fixed delta, for tests and deterministic stepping
    #[doc(hidden)]
    pub fn with_dt(dt_secs: f32) -> Self {
        let mut clock = Self::new();
        clock.dt_secs = dt_secs;
        clock.dt_ms = dt_secs * 1000.0;
        clock
    }
}
