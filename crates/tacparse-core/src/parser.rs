//! Line parser — turns one raw accounting line into a [`LogRecord`].
//!
//! Accepted shape:
//!
//! ```text
//! Mar 20 10:15:42 10.0.0.1 router1 tty0 10.0.0.5 start task_id=42 timezone=-3 cmd=show run
//! └──── date ───┘ └device┘ └host─┘ └tty┘ └source┘ └stat┘ └──────── extensions ────────┘
//! ```
//!
//! Anything else is a structural rejection: the line produces no record and
//! the caller carries on with the next one.

use crate::timezone::TimeZoneResolver;
use crate::types::LogRecord;

/// Tokens required before the optional `key=value` extensions.
pub const MIN_TOKENS: usize = 8;

/// Why a line was not turned into a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("line has {found} tokens, at least 8 required")]
    TooFewTokens { found: usize },
    #[error("invalid date/time prefix {prefix:?}: {reason}")]
    InvalidTimestamp { prefix: String, reason: String },
}

/// Recognised extension keys, in the order they appear on the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extension {
    TaskId,
    Timezone,
    Service,
    StartTime,
    PrivilegeLevel,
    Command,
}

impl Extension {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "task_id" => Some(Extension::TaskId),
            "timezone" => Some(Extension::Timezone),
            "service" => Some(Extension::Service),
            "start_time" => Some(Extension::StartTime),
            "priv-lvl" => Some(Extension::PrivilegeLevel),
            "cmd" => Some(Extension::Command),
            _ => None,
        }
    }
}

#[derive(Default)]
struct Extensions {
    task_id: Option<String>,
    timezone: Option<String>,
    service: Option<String>,
    start_time: Option<String>,
    privilege_level: Option<String>,
    command: Option<String>,
}

impl Extensions {
    /// Scan trailing tokens; unknown tokens are skipped and a repeated key
    /// overwrites the earlier value. `cmd=` consumes the rest of the line.
    fn scan(tokens: &[&str]) -> Self {
        let mut ext = Self::default();
        for (i, token) in tokens.iter().enumerate() {
            let Some((key, value)) = token.split_once('=') else {
                continue;
            };
            let Some(kind) = Extension::from_key(key) else {
                continue;
            };
            let slot = match kind {
                Extension::TaskId => &mut ext.task_id,
                Extension::Timezone => &mut ext.timezone,
                Extension::Service => &mut ext.service,
                Extension::StartTime => &mut ext.start_time,
                Extension::PrivilegeLevel => &mut ext.privilege_level,
                Extension::Command => {
                    let mut command = value.to_string();
                    for rest in &tokens[i + 1..] {
                        command.push(' ');
                        command.push_str(rest);
                    }
                    ext.command = Some(command);
                    break;
                }
            };
            // Only `cmd=` keeps embedded `=`; other values stop at the next one.
            *slot = value.split('=').next().map(str::to_string);
        }
        ext
    }
}

/// Parses accounting lines against a borrowed [`TimeZoneResolver`].
#[derive(Debug, Clone, Copy)]
pub struct LogLineParser<'a> {
    resolver: &'a TimeZoneResolver,
}

impl<'a> LogLineParser<'a> {
    pub fn new(resolver: &'a TimeZoneResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &'a TimeZoneResolver {
        self.resolver
    }

    /// Parse one line, returning `None` for anything that is not a record.
    pub fn parse(&self, raw_line: &str) -> Option<LogRecord> {
        match self.parse_line(raw_line) {
            Ok(record) => Some(record),
            Err(rejection) => {
                tracing::debug!(line = raw_line.trim(), %rejection, "line ignored");
                None
            }
        }
    }

    /// Parse one line, reporting why it was rejected.
    pub fn parse_line(&self, raw_line: &str) -> Result<LogRecord, Rejection> {
        let tokens: Vec<&str> = raw_line.split_whitespace().collect();
        if tokens.len() < MIN_TOKENS {
            return Err(Rejection::TooFewTokens {
                found: tokens.len(),
            });
        }

        let date_utc = format!("{} {} {}", tokens[0], tokens[1], tokens[2]);
        tracing::trace!(date_utc = %date_utc, "validating date and time");
        if let Err(e) = self.resolver.parse_utc(&date_utc) {
            return Err(Rejection::InvalidTimestamp {
                prefix: date_utc,
                reason: e.to_string(),
            });
        }

        let ext = Extensions::scan(&tokens[MIN_TOKENS..]);
        let date_local = self
            .resolver
            .compute_local_time(&date_utc, ext.timezone.as_deref());

        let record = LogRecord {
            time: tokens[2].to_string(),
            device_ip: tokens[3].to_string(),
            hostname: tokens[4].to_string(),
            tty: tokens[5].to_string(),
            source_ip: tokens[6].to_string(),
            status: tokens[7].to_string(),
            task_id: ext.task_id,
            timezone: ext.timezone,
            service: ext.service,
            start_time: ext.start_time,
            privilege_level: ext.privilege_level,
            command: ext.command,
            date_utc,
            date_local,
        };
        tracing::debug!(record = %record, "line parsed");
        Ok(record)
    }

    /// Parse every line in order, dropping rejected ones.
    pub fn parse_all<I, S>(&self, lines: I) -> Vec<LogRecord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .filter_map(|line| self.parse(line.as_ref()))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
