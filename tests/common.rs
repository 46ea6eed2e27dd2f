#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use std::cell::Cell;
use std::env;
use std::fs;
use std::path::PathBuf;
use timeloom::models::TimeEntry;
use timeloom::models::entry::parse_timestamp;
use timeloom::store::RecordStore;
use timeloom::utils::clock::Clock;

/// The binary, with HOME pointed at a scratch dir so no real config is read
pub fn tl() -> Command {
    let mut cmd = cargo_bin_cmd!("timeloom");
    let home = env::temp_dir().join("timeloom_test_home");
    fs::create_dir_all(&home).ok();
    cmd.env("HOME", home);
    cmd
}

/// Create a unique test data path inside the system temp dir and remove any existing file
pub fn setup_test_data(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timeloom.json", name));
    let data_path = path.to_string_lossy().to_string();
    fs::remove_file(&data_path).ok();
    fs::remove_file(path.with_extension("log")).ok();
    data_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn ts(s: &str) -> NaiveDateTime {
    parse_timestamp(s).expect("valid timestamp")
}

/// A completed entry between two `YYYY-MM-DD HH:MM:SS` timestamps
pub fn entry(task: &str, category: &str, start: &str, end: &str) -> TimeEntry {
    TimeEntry::running(task, category, ts(start)).completed_at(ts(end))
}

/// Three entries over two categories: Work 90 + 30 minutes, Study 45 minutes
pub fn sample_entries() -> Vec<TimeEntry> {
    vec![
        entry("Write report", "Work", "2025-09-01 09:00:00", "2025-09-01 10:30:00"),
        entry("Read book", "Study", "2025-09-01 20:00:00", "2025-09-01 20:45:00"),
        entry("Emails", "Work", "2025-09-02 08:00:00", "2025-09-02 08:30:00"),
    ]
}

/// Write the sample dataset to `data_path`
pub fn init_data_with_entries(data_path: &str) -> RecordStore {
    let store = RecordStore::new(data_path);
    store.save(&sample_entries()).expect("save sample data");
    store
}

/// Clock the test moves by hand
pub struct ManualClock {
    now: Cell<NaiveDateTime>,
}

impl ManualClock {
    pub fn at(s: &str) -> Self {
        Self {
            now: Cell::new(ts(s)),
        }
    }

    pub fn advance_secs(&self, secs: i64) {
        self.now.set(self.now.get() + chrono::Duration::seconds(secs));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}
