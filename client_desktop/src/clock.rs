use std::thread;
use std::time::{Duration, Instant};

/// Fixed-rate frame limiter
pub struct Clock {
    interval: Duration,
    last: Instant,
}

impl Clock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Instant::now(),
        }
    }

    /// Block until one interval has passed since the previous tick
    ///
    /// Returns the time actually elapsed. A tick that already overran does not sleep.
    pub fn tick(&mut self) -> Duration {
        let busy = self.last.elapsed();
        if busy < self.interval {
            thread::sleep(self.interval - busy);
        }

        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        elapsed
    }
}
