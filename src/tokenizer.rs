//! Line normalization: raw input text to pixel rows

use crate::models::{PixelCode, PixelRow};

/// Only this many leading bytes of an input line are examined.
pub const MAX_LINE_LEN: usize = 255;

/// Outcome of normalizing one raw input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    /// Starts with `#`; ignored without a diagnostic
    Comment,
    /// No pixel symbols survived filtering
    Unusable,
    /// A padded or truncated 8-pixel row
    Row(PixelRow),
}

/// Keep only pixel symbols (`.0123`) from a line, in order.
///
/// # Examples
///
/// ```
/// use pmsprite::models::PixelCode;
/// use pmsprite::tokenizer::extract_pixels;
///
/// let pixels = extract_pixels("1 x 2\n");
/// assert_eq!(pixels, vec![PixelCode::PlayerA, PixelCode::PlayerB]);
/// ```
pub fn extract_pixels(line: impl AsRef<[u8]>) -> Vec<PixelCode> {
    let line = line.as_ref();
    line.iter()
        .take(MAX_LINE_LEN)
        .filter_map(|&b| PixelCode::from_symbol(b))
        .collect()
}

/// Normalize a raw input line (trailing newline allowed).
///
/// # Examples
///
/// ```
/// use pmsprite::tokenizer::{normalize_line, Line};
///
/// assert_eq!(normalize_line("# a comment 1111"), Line::Comment);
/// assert_eq!(normalize_line("abc\n"), Line::Unusable);
/// assert!(matches!(normalize_line(".1.23..2\n"), Line::Row(_)));
/// ```
pub fn normalize_line(line: impl AsRef<[u8]>) -> Line {
    let line = line.as_ref();
    if line.first() == Some(&b'#') {
        return Line::Comment;
    }
    match PixelRow::from_codes(extract_pixels(line)) {
        Some(row) => Line::Row(row),
        None => Line::Unusable,
    }
}
