use std::time::Duration;

use web_time::Instant;

/// Frame interval above which a frame counts as stalled.
const STALL_THRESHOLD: Duration = Duration::from_millis(250);

/// Frame timing with smoothed FPS and stall detection.
///
/// Purely observational: the follow loop applies exactly one easing step per
/// frame however long the previous frame took, so a stall delays motion but
/// never doubles it up.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Previous frame timestamp, `None` before the first frame.
    last_frame: Option<Instant>,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    /// Frames recorded so far.
    frames: u64,
    /// Frames whose interval exceeded `STALL_THRESHOLD`.
    stalls: u64,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTiming {
    /// Create a frame timer with no frames recorded.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: None,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
            frames: 0,
            stalls: 0,
        }
    }

    /// Record a frame at `now`, returning the interval since the previous
    /// one.
    pub fn record(&mut self, now: Instant) -> Option<Duration> {
        self.frames += 1;
        let previous = self.last_frame.replace(now)?;
        let elapsed = now.saturating_duration_since(previous);

        if elapsed > STALL_THRESHOLD {
            self.stalls += 1;
            log::debug!(
                "frame stalled for {:.0}ms; applying a single easing step",
                elapsed.as_secs_f64() * 1000.0
            );
        }

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        Some(elapsed)
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Frames recorded so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frames that arrived after a stall.
    #[must_use]
    pub fn stalls(&self) -> u64 {
        self.stalls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_has_no_interval() {
        let mut timing = FrameTiming::new();
        assert_eq!(timing.record(Instant::now()), None);
        assert_eq!(timing.frames(), 1);
    }

    #[test]
    fn steady_frames_pull_fps_toward_rate() {
        let t0 = Instant::now();
        let mut timing = FrameTiming::new();
        for i in 0..200_u32 {
            let _ = timing.record(t0 + Duration::from_millis(u64::from(i) * 20));
        }
        assert!((timing.fps() - 50.0).abs() < 1.0, "fps {}", timing.fps());
        assert_eq!(timing.stalls(), 0);
    }

    #[test]
    fn long_gaps_count_as_stalls() {
        let t0 = Instant::now();
        let mut timing = FrameTiming::new();
        let _ = timing.record(t0);
        let elapsed = timing.record(t0 + Duration::from_millis(400));
        assert_eq!(elapsed, Some(Duration::from_millis(400)));
        assert_eq!(timing.stalls(), 1);
    }
}
