//! Domain-specific assertion macros for tacparse harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* line was rejected or accepted unexpectedly.

// ---------------------------------------------------------------------------
// Acceptance assertions
// ---------------------------------------------------------------------------

/// Assert that a line parses, returning the record.
///
/// ```rust
/// let record = assert_parses!(parser, LINE_FULL);
/// ```
#[macro_export]
macro_rules! assert_parses {
    ($parser:expr, $line:expr) => {{
        let line: &str = &$line;
        match $parser.parse_line(line) {
            Ok(record) => record,
            Err(rejection) => panic!(
                "assert_parses! failed: line was rejected.\n  line:   {:?}\n  reason: {}",
                line, rejection
            ),
        }
    }};
}

/// Assert that a line is structurally rejected.
///
/// ```rust
/// assert_rejected!(parser, "Feb 30 10:00:00 a b c d e");
/// ```
#[macro_export]
macro_rules! assert_rejected {
    ($parser:expr, $line:expr) => {{
        let line: &str = &$line;
        if let Some(record) = $parser.parse(line) {
            panic!(
                "assert_rejected! failed: line produced a record.\n  line:   {:?}\n  record: {}",
                line, record
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Record assertions
// ---------------------------------------------------------------------------

/// Assert that every optional extension field of a record is `None`.
#[macro_export]
macro_rules! assert_no_extensions {
    ($record:expr) => {{
        let record: &tacparse::LogRecord = &$record;
        let present: Vec<(&str, &String)> = [
            ("task_id", &record.task_id),
            ("timezone", &record.timezone),
            ("service", &record.service),
            ("start_time", &record.start_time),
            ("privilege_level", &record.privilege_level),
            ("command", &record.command),
        ]
        .into_iter()
        .filter_map(|(k, v)| v.as_ref().map(|v| (k, v)))
        .collect();
        if !present.is_empty() {
            panic!(
                "assert_no_extensions! failed: unexpected fields {:?}\n  record: {}",
                present, record
            );
        }
    }};
}

/// Assert the rendered `date_local` of a record.
///
/// ```rust
/// assert_local_time!(record, "2024-03-20 07:15:42");
/// ```
#[macro_export]
macro_rules! assert_local_time {
    ($record:expr, $expected:expr) => {{
        let record: &tacparse::LogRecord = &$record;
        let expected: &str = $expected;
        pretty_assertions::assert_eq!(
            record.date_local.to_string(),
            expected,
            "date_local mismatch for date_utc {:?} timezone {:?}",
            record.date_utc,
            record.timezone
        );
    }};
}
