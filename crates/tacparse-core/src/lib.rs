//! tacparse-core — parsing core for TACACS+ accounting logs.
//!
//! This crate exposes the pipeline layers as public modules, plus the shared
//! types used across them.
//!
//! # Architecture
//!
//! ```text
//! raw line ──► LogLineParser ──► LogRecord ──► Exporter
//!                   │
//!                   └──► TimeZoneResolver (OffsetTable)
//! ```
//!
//! Each line is parsed independently; no state is carried between lines
//! besides the read-only offset table.

pub mod config;
pub mod export;
pub mod parser;
pub mod timezone;
pub mod types;

pub use export::{ExportError, Exporter, OutputFormat};
pub use parser::{LogLineParser, Rejection};
pub use timezone::{OffsetTable, TimeZoneResolver, TimestampError};
pub use types::{LocalTime, LogRecord};
