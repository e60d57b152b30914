//! tacparse — TACACS+ accounting log parser.
//!
//! Re-exports the core and feed crates so integration tests and benchmarks can
//! import everything from one place, and provides the line-to-output pipeline
//! used by the binary.
//!
//! # Architecture
//!
//! ```text
//! InputSource ──► LogLineParser ──► Vec<LogRecord> ──► Exporter ──► stdout
//!                      │
//!                      └──► TimeZoneResolver
//! ```

pub use tacparse_core::{
    config, export, parser, timezone, types, ExportError, Exporter, LocalTime, LogLineParser,
    LogRecord, OffsetTable, OutputFormat, Rejection, TimeZoneResolver,
};
pub use tacparse_feeds::{FeedError, InputSource, LineFeed};

/// Parse `lines` and render the accepted records with `exporter`.
pub fn process<I, S>(
    lines: I,
    resolver: &TimeZoneResolver,
    exporter: &Exporter,
) -> Result<String, ExportError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let records = LogLineParser::new(resolver).parse_all(lines);
    tracing::debug!(records = records.len(), format = %exporter.format(), "rendering");
    exporter.render(&records)
}
