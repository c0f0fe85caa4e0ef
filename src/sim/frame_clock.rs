/// Turns host frame timestamps into simulation deltas.
///
/// Frames that arrive sooner than `min_frame_time` after the last simulated one are
/// skipped, and their time counts toward the next simulated frame. Simulated deltas are
/// clamped to `max_frame_time` and the clamped excess is never caught up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameClock {
    last_timestamp: Option<f64>,
    pub min_frame_time: f32,
    pub max_frame_time: f32,
}

impl FrameClock {
    #[must_use]
    pub const fn new(min_frame_time: f32, max_frame_time: f32) -> Self {
        Self {
            last_timestamp: None,
            min_frame_time,
            max_frame_time,
        }
    }

    /// Returns the delta to simulate for a frame at `timestamp` (seconds), or None to skip it.
    ///
    /// The first frame only primes the clock.
    pub fn tick(&mut self, timestamp: f64) -> Option<f32> {
        let Some(last) = self.last_timestamp else {
            self.last_timestamp = Some(timestamp);
            return None;
        };

        let elapsed = (timestamp - last).max(0.0) as f32;
        if elapsed < self.min_frame_time {
            return None;
        }

        self.last_timestamp = Some(timestamp);
        Some(elapsed.min(self.max_frame_time))
    }

    pub const fn reset(&mut self) {
        self.last_timestamp = None;
    }
}
