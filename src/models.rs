//! Data model for player/missile sprite grids
//!
//! A sprite is a stack of 8-pixel rows. Each pixel belongs to nobody, to one
//! of the two hardware players, or to both of them at once.

use crate::orientation::Direction;

/// Number of pixels in one row of player data.
pub const ROW_WIDTH: usize = 8;

/// Maximum number of rows held by a [`SpriteGrid`].
pub const MAX_ROWS: usize = 256;

/// One of the two hardware player objects a pixel can be drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Player 0, written from the `1` symbol
    A,
    /// Player 1, written from the `2` symbol
    B,
}

impl Player {
    /// Both players, in output order.
    pub const ALL: [Player; 2] = [Player::A, Player::B];
}

/// The meaning of a single sprite cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PixelCode {
    /// Transparent; input `.` or `0`
    #[default]
    Empty,
    /// Player A only; input `1`
    PlayerA,
    /// Player B only; input `2`
    PlayerB,
    /// Both players; input `3`
    Overlap,
}

impl PixelCode {
    /// Map an input symbol to its pixel code.
    ///
    /// Returns `None` for any byte outside `.0123`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pmsprite::models::PixelCode;
    ///
    /// assert_eq!(PixelCode::from_symbol(b'.'), Some(PixelCode::Empty));
    /// assert_eq!(PixelCode::from_symbol(b'0'), Some(PixelCode::Empty));
    /// assert_eq!(PixelCode::from_symbol(b'3'), Some(PixelCode::Overlap));
    /// assert_eq!(PixelCode::from_symbol(b'x'), None);
    /// ```
    pub fn from_symbol(symbol: u8) -> Option<Self> {
        match symbol {
            b'.' | b'0' => Some(PixelCode::Empty),
            b'1' => Some(PixelCode::PlayerA),
            b'2' => Some(PixelCode::PlayerB),
            b'3' => Some(PixelCode::Overlap),
            _ => None,
        }
    }

    /// Glyph used in the annotated picture. Empty cells always print as `.`.
    pub fn glyph(self) -> char {
        match self {
            PixelCode::Empty => '.',
            PixelCode::PlayerA => '1',
            PixelCode::PlayerB => '2',
            PixelCode::Overlap => '3',
        }
    }

    /// Whether this pixel sets a bit in the given player's bitmap.
    ///
    /// Overlap pixels belong to both players.
    pub fn is_set_for(self, player: Player) -> bool {
        match (self, player) {
            (PixelCode::Overlap, _) => true,
            (PixelCode::PlayerA, Player::A) => true,
            (PixelCode::PlayerB, Player::B) => true,
            _ => false,
        }
    }
}

/// Exactly [`ROW_WIDTH`] pixel codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelRow([PixelCode; ROW_WIDTH]);

impl PixelRow {
    /// Build a row from a sequence of pixel codes.
    ///
    /// Short sequences are padded on the right with [`PixelCode::Empty`];
    /// anything past [`ROW_WIDTH`] is dropped. Returns `None` when the
    /// sequence is empty.
    pub fn from_codes<I>(codes: I) -> Option<Self>
    where
        I: IntoIterator<Item = PixelCode>,
    {
        let mut cells = [PixelCode::Empty; ROW_WIDTH];
        let mut count = 0;
        for (cell, code) in cells.iter_mut().zip(codes) {
            *cell = code;
            count += 1;
        }
        if count == 0 {
            None
        } else {
            Some(Self(cells))
        }
    }

    /// The stored pixels, left to right.
    pub fn pixels(&self) -> &[PixelCode; ROW_WIDTH] {
        &self.0
    }

    /// Pixel at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<PixelCode> {
        self.0.get(index).copied()
    }

    /// Iterate pixels in the given traversal direction.
    pub fn iter(&self, direction: Direction) -> impl Iterator<Item = PixelCode> + '_ {
        (0..ROW_WIDTH).filter_map(move |i| self.get(direction.index(i, ROW_WIDTH)))
    }

    /// Player bitmap byte for this row.
    ///
    /// The first pixel in traversal order lands in the most significant bit.
    pub fn bits(&self, player: Player, direction: Direction) -> u8 {
        self.iter(direction)
            .fold(0u8, |acc, pixel| (acc << 1) | u8::from(pixel.is_set_for(player)))
    }
}

/// Ordered rows of sprite data, first input row at index 0.
///
/// Holds at most [`MAX_ROWS`] rows and is read-only once parsing finishes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpriteGrid {
    rows: Vec<PixelRow>,
}

impl SpriteGrid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row. Returns `false` (and drops the row) once the grid is full.
    pub fn push(&mut self, row: PixelRow) -> bool {
        if self.is_full() {
            return false;
        }
        self.rows.push(row);
        true
    }

    /// Whether the grid already holds [`MAX_ROWS`] rows.
    pub fn is_full(&self) -> bool {
        self.rows.len() >= MAX_ROWS
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in input order.
    pub fn rows(&self) -> &[PixelRow] {
        &self.rows
    }

    /// Row at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&PixelRow> {
        self.rows.get(index)
    }

    /// Iterate rows in the given traversal direction.
    pub fn iter_rows(&self, direction: Direction) -> impl Iterator<Item = &PixelRow> + '_ {
        let len = self.rows.len();
        (0..len).filter_map(move |i| self.get(direction.index(i, len)))
    }
}

impl FromIterator<PixelRow> for SpriteGrid {
    /// Collect rows, keeping only the first [`MAX_ROWS`].
    fn from_iter<T: IntoIterator<Item = PixelRow>>(iter: T) -> Self {
        Self { rows: iter.into_iter().take(MAX_ROWS).collect() }
    }
}

/// A non-fatal problem found while reading sprite input.
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub message: String,
    /// 1-based input line number
    pub line: usize,
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
