use crate::errors::{AppError, AppResult};
use crate::models::TimeEntry;
use crate::store::RecordStore;
use crate::store::log::ttlog_quiet;
use crate::utils::clock::{Clock, SystemClock};
use chrono::Duration;

/// The single in-flight timer of a session.
///
/// Idle while `active` is `None`. A session (menu or dashboard) owns one
/// `Timer` and passes it around by reference.
pub struct Timer<C: Clock = SystemClock> {
    clock: C,
    active: Option<TimeEntry>,
}

impl Timer<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Timer<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Timer<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            active: None,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// The in-flight entry, if any.
    pub fn current(&self) -> Option<&TimeEntry> {
        self.active.as_ref()
    }

    /// Start timing `task`. Fails if another timer is already running.
    pub fn start(&mut self, task: &str, category: &str) -> AppResult<&TimeEntry> {
        let task = task.trim();
        let category = category.trim();
        if task.is_empty() || category.is_empty() {
            return Err(AppError::MissingTaskOrCategory);
        }

        if let Some(running) = &self.active {
            return Err(AppError::TimerAlreadyRunning(running.task.clone()));
        }

        let entry = TimeEntry::running(task, category, self.clock.now());
        Ok(self.active.insert(entry))
    }

    /// Stop the running timer and append the completed entry to `store`.
    ///
    /// The timer stays running if the append fails.
    pub fn stop(&mut self, store: &RecordStore) -> AppResult<TimeEntry> {
        let running = self.active.as_ref().ok_or(AppError::TimerNotRunning)?;

        let completed = running.clone().completed_at(self.clock.now());
        store.append(&completed)?;
        ttlog_quiet(
            store.path(),
            "add",
            &completed.category,
            &format!(
                "Logged '{}' ({} mins)",
                completed.task,
                completed.minutes()
            ),
        );

        self.active = None;
        Ok(completed)
    }

    /// Drop the in-flight entry without recording it.
    pub fn discard(&mut self) -> Option<TimeEntry> {
        self.active.take()
    }

    /// Time since start, `None` when idle.
    pub fn elapsed(&self) -> Option<Duration> {
        self.active
            .as_ref()
            .map(|e| (self.clock.now() - e.start).max(Duration::zero()))
    }
}

/// `HH:MM:SS` rendering of an elapsed duration.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.num_seconds().max(0);
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
