use std::thread;
use std::time::{Duration, Instant};

/// Wall clock that paces the frame loop at a maximum rate.
///
/// Each call to [`FrameClock::tick`] sleeps until at least one frame budget
/// has passed since the previous call, then reports the actual elapsed time.
pub struct FrameClock {
    frame_budget: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(max_fps: f64) -> Self {
        Self {
            frame_budget: Duration::from_secs_f64(1.0 / max_fps),
            last: Instant::now(),
        }
    }

    /// Seconds elapsed since the previous call, never negative.
    ///
    /// Blocks the calling thread if the frame finished ahead of the budget.
    pub fn tick(&mut self) -> f64 {
        let elapsed = self.last.elapsed();
        if elapsed < self.frame_budget {
            thread::sleep(self.frame_budget - elapsed);
        }

        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f64();
        self.last = now;
        dt
    }
}
