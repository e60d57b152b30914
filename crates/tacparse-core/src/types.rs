//! Core types for tacparse-core.
//!
//! This module defines the structured [`LogRecord`] produced for every
//! accepted accounting line, and the [`LocalTime`] value carried in its
//! `date_local` field.

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

/// Output format for local timestamps.
pub const LOCAL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One parsed accounting record.
///
/// Field order is the serialization order. Optional fields are `None` when
/// the corresponding `key=value` token did not appear on the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    /// Month, day and time tokens joined with single spaces, e.g. `Mar 20 10:15:42`.
    pub date_utc: String,
    /// The time-of-day token alone.
    pub time: String,
    pub device_ip: String,
    pub hostname: String,
    pub tty: String,
    pub source_ip: String,
    pub status: String,
    pub task_id: Option<String>,
    pub timezone: Option<String>,
    pub service: Option<String>,
    pub start_time: Option<String>,
    /// Value of the `priv-lvl=` token.
    pub privilege_level: Option<String>,
    /// Value of the `cmd=` token, embedded `=` preserved.
    pub command: Option<String>,
    /// `date_utc` shifted by the offset of `timezone`.
    pub date_local: LocalTime,
}

/// Result of converting a UTC timestamp to local time.
///
/// A failed conversion does not drop the record; it renders inline as
/// `Error parsing date: <reason>` wherever the record is printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalTime {
    Converted(NaiveDateTime),
    Failed(String),
}

impl LocalTime {
    pub fn is_converted(&self) -> bool {
        matches!(self, LocalTime::Converted(_))
    }

    /// The converted timestamp, if conversion succeeded.
    pub fn datetime(&self) -> Option<NaiveDateTime> {
        match self {
            LocalTime::Converted(dt) => Some(*dt),
            LocalTime::Failed(_) => None,
        }
    }
}

impl std::fmt::Display for LocalTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocalTime::Converted(dt) => write!(f, "{}", dt.format(LOCAL_TIME_FORMAT)),
            LocalTime::Failed(reason) => write!(f, "Error parsing date: {reason}"),
        }
    }
}

impl Serialize for LocalTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl std::fmt::Display for LogRecord {
    /// Single-line `{key: value, ...}` rendering in field order.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let optional = |v: &Option<String>| match v {
            Some(s) => format!("{s:?}"),
            None => "null".to_string(),
        };
        write!(
            f,
            "{{date_utc: {:?}, time: {:?}, device_ip: {:?}, hostname: {:?}, tty: {:?}, \
             source_ip: {:?}, status: {:?}, task_id: {}, timezone: {}, service: {}, \
             start_time: {}, privilege_level: {}, command: {}, date_local: {:?}}}",
            self.date_utc,
            self.time,
            self.device_ip,
            self.hostname,
            self.tty,
            self.source_ip,
            self.status,
            optional(&self.task_id),
            optional(&self.timezone),
            optional(&self.service),
            optional(&self.start_time),
            optional(&self.privilege_level),
            optional(&self.command),
            self.date_local.to_string(),
        )
    }
}
