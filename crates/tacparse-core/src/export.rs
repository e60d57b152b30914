//! Export layer — renders parsed records as plain text, JSON, or YAML.
//!
//! All three formats keep the record field order. Absent optional fields are
//! rendered as `null` rather than omitted.

use serde::Serialize;

use crate::types::LogRecord;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `{key: value, ...}` line per record.
    #[default]
    Plain,
    /// Pretty-printed JSON array.
    Json,
    /// Block-style YAML sequence.
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to serialize records as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to serialize records as YAML: {0}")]
    Yaml(String),
    #[error("{format} output is not available in this build; {hint}")]
    Unsupported {
        format: OutputFormat,
        hint: &'static str,
    },
}

/// Fail early if `format` cannot be produced by this build.
pub fn ensure_supported(format: OutputFormat) -> Result<(), ExportError> {
    match format {
        OutputFormat::Yaml if !cfg!(feature = "yaml") => Err(ExportError::Unsupported {
            format,
            hint: "rebuild tacparse with `--features yaml` to enable it",
        }),
        _ => Ok(()),
    }
}

/// Renders records in one format.
#[derive(Debug, Clone)]
pub struct Exporter {
    format: OutputFormat,
    json_indent: usize,
}

impl Exporter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            json_indent: 4,
        }
    }

    /// Spaces per JSON nesting level.
    pub fn json_indent(mut self, indent: usize) -> Self {
        self.json_indent = indent;
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Render the whole sequence. Plain output of an empty slice is empty.
    pub fn render(&self, records: &[LogRecord]) -> Result<String, ExportError> {
        ensure_supported(self.format)?;
        match self.format {
            OutputFormat::Plain => Ok(records.iter().map(|r| format!("{r}\n")).collect()),
            OutputFormat::Json => self.render_json(records),
            OutputFormat::Yaml => render_yaml(records),
        }
    }

    fn render_json(&self, records: &[LogRecord]) -> Result<String, ExportError> {
        let indent = " ".repeat(self.json_indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records.serialize(&mut ser)?;
        buf.push(b'\n');
        // serde_json only ever writes valid UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(feature = "yaml")]
fn render_yaml(records: &[LogRecord]) -> Result<String, ExportError> {
    serde_yaml::to_string(records).map_err(|e| ExportError::Yaml(e.to_string()))
}

#[cfg(not(feature = "yaml"))]
fn render_yaml(_records: &[LogRecord]) -> Result<String, ExportError> {
    Err(ExportError::Unsupported {
        format: OutputFormat::Yaml,
        hint: "rebuild tacparse with `--features yaml` to enable it",
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
