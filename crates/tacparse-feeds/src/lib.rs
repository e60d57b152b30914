//! tacparse-feeds — input sources for tacparse.
//!
//! Each feed reads raw bytes from its source and hands back the text split
//! into lines. Invalid UTF-8 is replaced rather than rejected, so a single
//! corrupt byte never aborts a run.

pub mod file;
pub mod prompt;
pub mod stdin;

use std::io::IsTerminal;
use std::path::PathBuf;

pub use file::FileFeed;
pub use stdin::StdinFeed;

/// Implemented by each input source.
pub trait LineFeed {
    /// Human-readable name of the source, used in diagnostics.
    fn describe(&self) -> String;

    /// Read the whole source and split it into lines.
    fn read_lines(&mut self) -> Result<Vec<String>, FeedError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("the file '{}' does not exist or cannot be read", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read standard input")]
    Stdin(#[source] std::io::Error),
    #[error("no log file name given")]
    NoPath,
}

/// Where log lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
    /// Ask for a file name on the terminal.
    Prompt,
}

impl InputSource {
    /// An explicit path wins; otherwise piped stdin; otherwise prompt.
    pub fn select(path: Option<PathBuf>) -> Self {
        Self::select_with(path, !std::io::stdin().is_terminal())
    }

    pub fn select_with(path: Option<PathBuf>, stdin_piped: bool) -> Self {
        match path {
            Some(path) => InputSource::File(path),
            None if stdin_piped => InputSource::Stdin,
            None => InputSource::Prompt,
        }
    }

    /// Read every line from this source.
    pub fn read_lines(&self) -> Result<Vec<String>, FeedError> {
        let mut feed: Box<dyn LineFeed> = match self {
            InputSource::File(path) => Box::new(FileFeed::new(path)),
            InputSource::Stdin => Box::new(StdinFeed::new(std::io::stdin().lock())),
            InputSource::Prompt => {
                let path = prompt::ask_for_path(std::io::stdin().lock(), std::io::stderr())?;
                Box::new(FileFeed::new(path))
            }
        };
        let lines = feed.read_lines()?;
        tracing::debug!(source = %feed.describe(), lines = lines.len(), "lines read");
        Ok(lines)
    }
}

/// Decode bytes as UTF-8, replacing invalid sequences, and split into lines.
pub fn decode_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::to_string)
        .collect()
}
