use chrono::{Duration, DurationRound, Local, NaiveDateTime};
use std::sync::{Arc, Mutex};

/// Source of "now" for inventory timestamps and approval dates.
pub trait Clock: Send {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        let now = Local::now().naive_local();
        // Timestamps are stored at minute precision.
        now.duration_trunc(Duration::minutes(1)).unwrap_or(now)
    }
}

/// A clock that only moves when told to. Used by tests and script replays
/// that need reproducible timestamps.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<NaiveDateTime>>,
}

impl ManualClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}
