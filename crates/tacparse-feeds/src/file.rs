//! File feed — reads a log file from disk in one go.

use std::path::{Path, PathBuf};

use crate::{decode_lines, FeedError, LineFeed};

#[derive(Debug, Clone)]
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineFeed for FileFeed {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    fn read_lines(&mut self) -> Result<Vec<String>, FeedError> {
        let bytes = std::fs::read(&self.path).map_err(|source| FeedError::Open {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "file read");
        Ok(decode_lines(&bytes))
    }
}
