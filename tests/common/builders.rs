//! Test builders — ergonomic constructors for lines, resolvers and records.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use tacparse::{LocalTime, LogRecord, OffsetTable, TimeZoneResolver};

use super::fixtures::REFERENCE_YEAR;

/// Resolver over the built-in offset table, pinned to [`REFERENCE_YEAR`].
pub fn builtin_resolver() -> TimeZoneResolver {
    TimeZoneResolver::new(OffsetTable::builtin(), REFERENCE_YEAR)
}

/// Naive timestamp in [`REFERENCE_YEAR`].
pub fn ts(month: u32, day: u32, h: u32, m: u32, s: u32) -> chrono::NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(REFERENCE_YEAR, month, day)
        .and_then(|d| d.and_hms_opt(h, m, s))
        .expect("valid test timestamp")
}

// ---------------------------------------------------------------------------
// LineBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for raw accounting lines.
///
/// # Example
///
/// ```rust
/// let line = LineBuilder::new()
///     .status("stop")
///     .ext("timezone", "ART")
///     .ext("cmd", "show clock")
///     .build();
/// ```
pub struct LineBuilder {
    date: String,
    device_ip: String,
    hostname: String,
    tty: String,
    source_ip: String,
    status: String,
    extensions: Vec<String>,
    separator: String,
}

impl Default for LineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuilder {
    pub fn new() -> Self {
        Self {
            date: "Mar 20 10:15:42".to_string(),
            device_ip: "10.0.0.1".to_string(),
            hostname: "router1".to_string(),
            tty: "tty0".to_string(),
            source_ip: "10.0.0.5".to_string(),
            status: "start".to_string(),
            extensions: Vec::new(),
            separator: " ".to_string(),
        }
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Append a `key=value` token.
    pub fn ext(mut self, key: &str, value: &str) -> Self {
        self.extensions.push(format!("{key}={value}"));
        self
    }

    /// Append an arbitrary trailing token.
    pub fn token(mut self, token: &str) -> Self {
        self.extensions.push(token.to_string());
        self
    }

    /// Separator placed between fixed fields and extensions.
    pub fn separator(mut self, sep: &str) -> Self {
        self.separator = sep.to_string();
        self
    }

    pub fn build(self) -> String {
        let mut parts = vec![
            self.date,
            self.device_ip,
            self.hostname,
            self.tty,
            self.source_ip,
            self.status,
        ];
        parts.extend(self.extensions);
        parts.join(&self.separator)
    }
}

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for expected [`LogRecord`] values, defaulting to the
/// fields of [`LineBuilder::new`].
pub struct RecordBuilder {
    record: LogRecord,
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            record: LogRecord {
                date_utc: "Mar 20 10:15:42".to_string(),
                time: "10:15:42".to_string(),
                device_ip: "10.0.0.1".to_string(),
                hostname: "router1".to_string(),
                tty: "tty0".to_string(),
                source_ip: "10.0.0.5".to_string(),
                status: "start".to_string(),
                task_id: None,
                timezone: None,
                service: None,
                start_time: None,
                privilege_level: None,
                command: None,
                date_local: LocalTime::Converted(ts(3, 20, 10, 15, 42)),
            },
        }
    }

    pub fn task_id(mut self, v: &str) -> Self {
        self.record.task_id = Some(v.to_string());
        self
    }

    pub fn timezone(mut self, v: &str) -> Self {
        self.record.timezone = Some(v.to_string());
        self
    }

    pub fn service(mut self, v: &str) -> Self {
        self.record.service = Some(v.to_string());
        self
    }

    pub fn privilege_level(mut self, v: &str) -> Self {
        self.record.privilege_level = Some(v.to_string());
        self
    }

    pub fn command(mut self, v: &str) -> Self {
        self.record.command = Some(v.to_string());
        self
    }

    pub fn date_local(mut self, local: chrono::NaiveDateTime) -> Self {
        self.record.date_local = LocalTime::Converted(local);
        self
    }

    pub fn build(self) -> LogRecord {
        self.record
    }
}
