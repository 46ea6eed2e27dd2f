//! JSON-backed record store: the whole entry list lives in one file and every
//! mutation is a read-modify-write of that file.

use crate::errors::AppResult;
use crate::models::TimeEntry;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::{Path, PathBuf};

pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All persisted entries.
    ///
    /// A missing or unparseable file yields an empty list.
    pub fn load(&self) -> Vec<TimeEntry> {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Overwrite the file with `entries`.
    pub fn save(&self, entries: &[TimeEntry]) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        entries.serialize(&mut ser)?;

        fs::write(&self.path, buf)?;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<TimeEntry> {
        self.load().into_iter().nth(index)
    }

    pub fn append(&self, entry: &TimeEntry) -> AppResult<()> {
        let mut entries = self.load();
        entries.push(entry.clone());
        self.save(&entries)
    }

    /// Replace the entry at `index`. Returns `false` when out of bounds.
    pub fn replace(&self, index: usize, entry: &TimeEntry) -> AppResult<bool> {
        let mut entries = self.load();
        match entries.get_mut(index) {
            Some(slot) => {
                *slot = entry.clone();
                self.save(&entries)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the entry at `index`, shifting later entries down by one.
    /// Returns `false` when out of bounds.
    pub fn delete(&self, index: usize) -> AppResult<bool> {
        let mut entries = self.load();
        if index >= entries.len() {
            return Ok(false);
        }
        entries.remove(index);
        self.save(&entries)?;
        Ok(true)
    }
}
