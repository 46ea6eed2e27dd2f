use chrono::{Local, NaiveDateTime};

/// Source of "now" for the timer, so tests can control elapsed time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
