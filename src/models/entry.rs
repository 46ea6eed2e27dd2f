use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Timestamp format used in the data file, in exports and on screen.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One tracked task.
///
/// `end` and `duration_mins` are only absent for the in-flight entry held by
/// a running timer; every entry written by the store normally carries both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub task: String,
    pub category: String,
    #[serde(with = "timestamp")]
    pub start: NaiveDateTime,
    #[serde(
        default,
        with = "optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub end: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_mins: Option<f64>,
}

impl TimeEntry {
    /// Entry for a timer that has just been started.
    pub fn running(task: &str, category: &str, start: NaiveDateTime) -> Self {
        Self {
            task: task.to_string(),
            category: category.to_string(),
            start,
            end: None,
            duration_mins: None,
        }
    }

    /// Close the entry at `end`, computing `duration_mins`.
    pub fn completed_at(mut self, end: NaiveDateTime) -> Self {
        self.duration_mins = Some(minutes_between(self.start, end));
        self.end = Some(end);
        self
    }

    pub fn is_running(&self) -> bool {
        self.end.is_none()
    }

    /// Duration in minutes, 0 when the entry has none.
    pub fn minutes(&self) -> f64 {
        self.duration_mins.unwrap_or(0.0)
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn start_str(&self) -> String {
        self.start.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn end_str(&self) -> String {
        self.end
            .map(|e| e.format(TIMESTAMP_FORMAT).to_string())
            .unwrap_or_default()
    }
}

/// Minutes elapsed from `start` to `end`, rounded to two decimals.
pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    let millis = (end - start).num_milliseconds() as f64;
    round2(millis / 60_000.0)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT).ok()
}

mod timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&value.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(de::Error::custom)
    }
}

mod optional_timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        s: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => s.serialize_str(&v.format(TIMESTAMP_FORMAT).to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDateTime>, D::Error> {
        match Option::<String>::deserialize(d)? {
            Some(raw) => NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT)
                .map(Some)
                .map_err(de::Error::custom),
            None => Ok(None),
        }
    }
}
