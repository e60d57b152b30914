//! Interactive prompt — asks for a log file name when nothing else was given.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::FeedError;

pub const PROMPT: &str = "Log file name: ";

/// Write [`PROMPT`] to `output` and read one line from `input`.
pub fn ask_for_path<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<PathBuf, FeedError> {
    output
        .write_all(PROMPT.as_bytes())
        .and_then(|_| output.flush())
        .map_err(FeedError::Stdin)?;

    let mut answer = String::new();
    input.read_line(&mut answer).map_err(FeedError::Stdin)?;
    let answer = answer.trim();
    if answer.is_empty() {
        return Err(FeedError::NoPath);
    }
    Ok(PathBuf::from(answer))
}
