//! Frame timestamps to simulation deltas

/// Turns a stream of monotonically increasing frame timestamps (ms) into
/// elapsed times
///
/// The first frame after arming only records its timestamp, so the latency
/// between arming and the first frame never shows up as motion.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_timestamp: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed ms since the previous frame, or `None` for the seeding frame
    pub fn advance(&mut self, timestamp: f64) -> Option<f32> {
        let previous = self.last_timestamp.replace(timestamp)?;
        Some((timestamp - previous).max(0.0) as f32)
    }

    /// Forget the previous timestamp; the next frame seeds again
    pub fn disarm(&mut self) {
        self.last_timestamp = None;
    }

    pub fn is_seeded(&self) -> bool {
        self.last_timestamp.is_some()
    }
}
