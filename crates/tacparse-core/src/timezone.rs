//! Timezone resolution — label → UTC offset lookup and local time conversion.
//!
//! Accounting lines carry their timestamp in UTC without a year and, optionally,
//! a `timezone=<label>` token. [`TimeZoneResolver`] maps the label through an
//! [`OffsetTable`] and shifts the timestamp by that many hours.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDateTime, TimeDelta, Timelike};

use crate::types::LocalTime;

/// Format of the timestamp prefix once the reference year has been prepended.
const UTC_TIMESTAMP_FORMAT: &str = "%Y %b %d %H:%M:%S";

/// Labels known without any configuration.
const BUILTIN_OFFSETS: &[(&str, i64)] = &[("-3", -3), ("0", 0), ("ART", -3)];

/// Why a timestamp prefix could not be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    #[error(transparent)]
    Parse(#[from] chrono::ParseError),
    /// chrono reads `:60` as a leap second; accounting lines never carry one.
    #[error("second {0} is out of range (0..=59)")]
    LeapSecond(u32),
}

// ---------------------------------------------------------------------------
// OffsetTable
// ---------------------------------------------------------------------------

/// Immutable mapping from timezone label to whole-hour UTC offset.
///
/// Labels are matched exactly: no case folding, no trimming.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OffsetTable {
    offsets: HashMap<String, i64>,
}

impl OffsetTable {
    /// An empty table. Every label resolves to UTC.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in table: `-3`, `0` and `ART`.
    pub fn builtin() -> Self {
        BUILTIN_OFFSETS
            .iter()
            .map(|(label, hours)| (label.to_string(), *hours))
            .collect()
    }

    /// Return a copy of this table with `label` mapped to `hours`.
    pub fn with(mut self, label: impl Into<String>, hours: i64) -> Self {
        self.offsets.insert(label.into(), hours);
        self
    }

    pub fn get(&self, label: &str) -> Option<i64> {
        self.offsets.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl FromIterator<(String, i64)> for OffsetTable {
    fn from_iter<T: IntoIterator<Item = (String, i64)>>(iter: T) -> Self {
        Self {
            offsets: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// TimeZoneResolver
// ---------------------------------------------------------------------------

/// Converts year-less UTC timestamps to local time.
///
/// The source format has no year, so every timestamp is placed in
/// `reference_year`. Lines spanning a new year are assigned to the same year.
#[derive(Debug, Clone)]
pub struct TimeZoneResolver {
    table: OffsetTable,
    reference_year: i32,
}

impl TimeZoneResolver {
    pub fn new(table: OffsetTable, reference_year: i32) -> Self {
        Self {
            table,
            reference_year,
        }
    }

    /// Resolver whose reference year is the current year of the local clock.
    pub fn with_current_year(table: OffsetTable) -> Self {
        Self::new(table, chrono::Local::now().year())
    }

    pub fn table(&self) -> &OffsetTable {
        &self.table
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Offset in hours for `label`; 0 when the label is absent or unknown.
    pub fn resolve_offset(&self, label: Option<&str>) -> i64 {
        label.and_then(|l| self.table.get(l)).unwrap_or(0)
    }

    /// Parse a `Mon D HH:MM:SS` timestamp in the reference year.
    ///
    /// Surrounding whitespace is ignored and runs of inner whitespace count as
    /// one separator, so space-padded days (`Mar  2`) parse.
    ///
    /// Second `60` is refused even though chrono accepts it as a leap second.
    pub fn parse_utc(&self, timestamp: &str) -> Result<NaiveDateTime, TimestampError> {
        let normalized = timestamp.split_whitespace().collect::<Vec<_>>().join(" ");
        let dt = NaiveDateTime::parse_from_str(
            &format!("{} {}", self.reference_year, normalized),
            UTC_TIMESTAMP_FORMAT,
        )?;
        if dt.nanosecond() >= 1_000_000_000 {
            return Err(TimestampError::LeapSecond(dt.second() + 1));
        }
        Ok(dt)
    }

    /// Shift `utc_timestamp` by the offset of `label`.
    ///
    /// Never fails: an unparsable timestamp yields [`LocalTime::Failed`].
    pub fn compute_local_time(&self, utc_timestamp: &str, label: Option<&str>) -> LocalTime {
        let utc = match self.parse_utc(utc_timestamp) {
            Ok(dt) => dt,
            Err(e) => {
                tracing::debug!(timestamp = utc_timestamp, error = %e, "failed to parse date");
                return LocalTime::Failed(e.to_string());
            }
        };

        let offset = self.resolve_offset(label);
        match TimeDelta::try_hours(offset).and_then(|delta| utc.checked_add_signed(delta)) {
            Some(local) => LocalTime::Converted(local),
            None => {
                tracing::debug!(timestamp = utc_timestamp, offset, "offset out of range");
                LocalTime::Failed(format!("offset of {offset} hours is out of range"))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
