use std::time::{Duration, Instant};

/// Paces a loop to a fixed period, measured from the end of the previous sleep.
pub struct Sleeper {
    pub target_delta_time: Duration,
    pub last_instant: Option<Instant>,
}

impl Sleeper {
    pub fn new(target_delta_time: Duration) -> Self {
        Self {
            target_delta_time,
            last_instant: None,
        }
    }

    /// Sleeps for whatever is left of the period. Returns whether any sleeping happened.
    pub fn sleep(&mut self) -> bool {
        let slept = match self.remaining() {
            Some(remaining) if !remaining.is_zero() => {
                spin_sleep::sleep(remaining);
                true
            }
            _ => false,
        };

        self.last_instant = Some(Instant::now());
        slept
    }

    /// Time left in the current period, or `None` if the loop never slept yet.
    pub fn remaining(&self) -> Option<Duration> {
        let last_instant = self.last_instant?;
        Some(self.target_delta_time.saturating_sub(last_instant.elapsed()))
    }
}
