//! Stdin feed — reads piped input until EOF.

use std::io::Read;

use crate::{decode_lines, FeedError, LineFeed};

/// Reads everything from `R`. Generic so tests can feed a byte slice.
pub struct StdinFeed<R> {
    reader: R,
}

impl<R: Read> StdinFeed<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> LineFeed for StdinFeed<R> {
    fn describe(&self) -> String {
        "stdin".to_string()
    }

    fn read_lines(&mut self) -> Result<Vec<String>, FeedError> {
        let mut bytes = Vec::new();
        self.reader
            .read_to_end(&mut bytes)
            .map_err(FeedError::Stdin)?;
        Ok(decode_lines(&bytes))
    }
}
