//! Configuration types for tacparse.
//!
//! [`Config::load`] layers `~/.config/tacparse/config.toml` (when present) on
//! top of the embedded defaults. [`Config::defaults`] returns the same
//! defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::timezone::{OffsetTable, TimeZoneResolver};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

// Timezones are an array of tables so that labels keep their case.
const DEFAULT_CONFIG: &str = r#"
[parser]
# reference_year = 2024

[output]
json_indent = 4

[[timezones]]
label        = "-3"
offset_hours = -3

[[timezones]]
label        = "0"
offset_hours = 0

[[timezones]]
label        = "ART"
offset_hours = -3
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub timezones: Vec<TimezoneEntry>,
}

/// `[parser]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParserConfig {
    /// Year assumed for year-less timestamps. Defaults to the current year.
    #[serde(default)]
    pub reference_year: Option<i32>,
}

/// `[output]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_json_indent")]
    pub json_indent: usize,
}

fn default_json_indent() -> usize {
    4
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json_indent: default_json_indent(),
        }
    }
}

/// One `[[timezones]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimezoneEntry {
    pub label: String,
    pub offset_hours: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the user config file, layered on top of the built-in defaults.
    /// A missing file is not an error.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load `path` on top of the built-in defaults. `[[timezones]]` in the
    /// file replaces the default list as a whole.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        tracing::debug!(path = %path.display(), exists = path.exists(), "loading config");
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        Self::from_toml(DEFAULT_CONFIG)
            .expect("built-in default config must be valid TOML")
    }

    /// Parse a TOML document on top of the built-in defaults.
    pub fn from_toml(toml: &str) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    pub fn offset_table(&self) -> OffsetTable {
        self.timezones
            .iter()
            .map(|tz| (tz.label.clone(), tz.offset_hours))
            .collect()
    }

    /// Build the resolver described by this config.
    pub fn resolver(&self) -> TimeZoneResolver {
        match self.parser.reference_year {
            Some(year) => TimeZoneResolver::new(self.offset_table(), year),
            None => TimeZoneResolver::with_current_year(self.offset_table()),
        }
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("tacparse")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
