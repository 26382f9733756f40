use web_time::{Duration, Instant};

/// Frame clock for a driver loop: supplies the timestamp handed to
/// [`Scene::render`](crate::scene::Scene::render), optional frame limiting,
/// and a smoothed FPS readout.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// When the clock was created; timestamps are relative to this
    start: Instant,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / target_fps as f64)
        } else {
            Duration::ZERO
        };
        let now = Instant::now();

        Self {
            target_fps,
            min_frame_duration,
            start: now,
            last_frame: now,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Seconds since the clock started.
    #[must_use]
    pub fn timestamp(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    /// Returns true if enough time has passed since the last frame to
    /// render another.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Time left before the next frame is due (zero if already due).
    #[must_use]
    pub fn time_until_next_frame(&self) -> Duration {
        self.min_frame_duration
            .saturating_sub(self.last_frame.elapsed())
    }

    /// Call after rendering to update timing.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_always_renders() {
        let timing = FrameTiming::new(0);
        assert!(timing.should_render());
        assert_eq!(timing.time_until_next_frame(), Duration::ZERO);
    }

    #[test]
    fn limited_waits_for_frame_interval() {
        let timing = FrameTiming::new(1);
        assert!(!timing.should_render());
        assert!(timing.time_until_next_frame() > Duration::ZERO);
    }

    #[test]
    fn timestamps_are_monotonic() {
        let timing = FrameTiming::new(60);
        let a = timing.timestamp();
        let b = timing.timestamp();
        assert!(a >= 0.0 && b >= a);
    }

    #[test]
    fn fps_starts_at_sixty_and_stays_positive() {
        let mut timing = FrameTiming::new(0);
        assert_eq!(timing.fps(), 60.0);
        std::thread::sleep(Duration::from_millis(2));
        timing.end_frame();
        assert!(timing.fps() > 0.0);
    }
}
