use std::time::{Duration, Instant};

/// Length of one countdown tick
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Repeating countdown clock.
///
/// Armed while a countdown is running, disarmed otherwise. Re-arming starts a
/// fresh interval.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            next_due: None,
        }
    }

    #[cfg(test)]
    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Arm when `running` and not yet armed; disarm when not `running`
    pub fn sync(&mut self, running: bool, now: Instant) {
        match (running, self.next_due) {
            (true, None) => self.next_due = Some(now + self.interval),
            (false, Some(_)) => self.next_due = None,
            _ => {}
        }
    }

    /// Number of whole intervals elapsed since the last call, consuming them
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let Some(mut due) = self.next_due else {
            return 0;
        };

        let mut ticks = 0;
        while due <= now {
            ticks += 1;
            due += self.interval;
        }
        self.next_due = Some(due);
        ticks
    }

    /// How long to wait for input before the next tick is due, capped at `max`
    pub fn timeout(&self, now: Instant, max: Duration) -> Duration {
        match self.next_due {
            Some(due) => due.saturating_duration_since(now).min(max),
            None => max,
        }
    }
}
