//! Streaming sprite parsing
//!
//! Reads line-oriented sprite text into a [`SpriteGrid`], collecting a
//! [`Warning`] for every line that carries no pixel data.

use std::io::{self, BufRead, BufReader, Read};

use thiserror::Error;

use crate::models::{SpriteGrid, Warning};
use crate::tokenizer::{normalize_line, Line, MAX_LINE_LEN};

/// I/O failure while reading sprite input.
#[derive(Debug, Error)]
#[error("line {line}: failed to read input: {source}")]
pub struct ReadError {
    /// 1-based line number being read when the failure occurred
    pub line: usize,
    #[source]
    pub source: std::io::Error,
}

/// Result of parsing a sprite stream.
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    pub grid: SpriteGrid,
    pub warnings: Vec<Warning>,
    /// Total number of input lines consumed, including ignored ones
    pub lines_read: usize,
}

/// Message reported for a line that produced no pixel data.
pub fn unusable_line_message(line: usize) -> String {
    format!("No usable data read at line {}. Skipping...", line)
}

/// Discard input up to and including the next newline.
///
/// Returns the number of bytes consumed; 0 means end of input.
pub(crate) fn skip_line<R: BufRead>(reader: &mut R) -> io::Result<usize> {
    let mut skipped = 0;
    loop {
        let (done, used) = {
            let available = match reader.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            match available.iter().position(|&b| b == b'\n') {
                Some(i) => (true, i + 1),
                None => (available.is_empty(), available.len()),
            }
        };
        reader.consume(used);
        skipped += used;
        if done {
            return Ok(skipped);
        }
    }
}

/// Read one line into `buf`, keeping at most [`MAX_LINE_LEN`] bytes of it.
///
/// The rest of an overlong line is consumed and dropped, so `buf` never
/// grows past the cap. Returns the number of bytes consumed; 0 means end of
/// input.
pub(crate) fn read_capped_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<usize> {
    let read = reader.by_ref().take(MAX_LINE_LEN as u64).read_until(b'\n', buf)?;
    if read == MAX_LINE_LEN && buf.last() != Some(&b'\n') {
        return Ok(read + skip_line(reader)?);
    }
    Ok(read)
}

/// Parse a stream of sprite text into a grid.
///
/// Comment lines (`#` in the first column) are skipped silently. Lines with
/// no pixel symbols produce a warning and are skipped. Only the first
/// [`MAX_LINE_LEN`] bytes of a line are kept in memory. Once the grid is full
/// the rest of the stream is consumed without being buffered.
///
/// Input does not need to be valid UTF-8; only ASCII pixel symbols matter.
pub fn parse_stream<R: Read>(reader: R) -> Result<ParseResult, ReadError> {
    let mut result = ParseResult::default();
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let line_number = result.lines_read + 1;
        let full = result.grid.is_full();
        let read = if full {
            skip_line(&mut reader)
        } else {
            read_capped_line(&mut reader, &mut buf)
        }
        .map_err(|source| ReadError { line: line_number, source })?;
        if read == 0 {
            break;
        }
        result.lines_read = line_number;

        if full {
            continue;
        }

        match normalize_line(&buf) {
            Line::Comment => {}
            Line::Unusable => result.warnings.push(Warning {
                message: unusable_line_message(line_number),
                line: line_number,
            }),
            Line::Row(row) => {
                result.grid.push(row);
            }
        }
    }

    Ok(result)
}
