//! Sprite rendering to assembler source text
//!
//! One block per orientation: a blank line, the annotated picture, then a
//! section per player whose data lines start with a tab. Each spaced bit
//! group in the picture carries a trailing space.
//!
//! ```
//! use std::io::Cursor;
//!
//! use pmsprite::orientation::Orientation;
//! use pmsprite::parser::parse_stream;
//! use pmsprite::renderer::{render_block, RenderOptions};
//!
//! let grid = parse_stream(Cursor::new(".1.23..2\n")).unwrap().grid;
//! let block = render_block(&grid, Orientation::Normal.traversal(), &RenderOptions::default());
//! assert_eq!(
//!     block,
//!     "\n\
//! ; 0 1 2 3 4 5 6 7   PM0               PM1\n\
//! ; . 1 . 2 3 . . 2   0 1 0 0 1 0 0 0   0 0 0 1 1 0 0 1 \n\
//! \n\
//! PM0_something\n\
//! \t.by %01001000\n\
//! \n\
//! PM1_something\n\
//! \t.by %00011001\n\
//! \n"
//! );
//! ```

use crate::models::{PixelRow, Player, SpriteGrid};
use crate::orientation::{Direction, Traversal};

/// Title line of the annotated picture section.
pub const PICTURE_TITLE: &str = "; 0 1 2 3 4 5 6 7   PM0               PM1";

/// Default section header for the player A bitmap.
pub const DEFAULT_PLAYER_A_LABEL: &str = "PM0_something";

/// Default section header for the player B bitmap.
pub const DEFAULT_PLAYER_B_LABEL: &str = "PM1_something";

/// Default byte data directive.
pub const DEFAULT_DIRECTIVE: &str = ".by";

/// Literal tokens placed around the generated data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub player_a_label: String,
    pub player_b_label: String,
    pub directive: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            player_a_label: DEFAULT_PLAYER_A_LABEL.to_string(),
            player_b_label: DEFAULT_PLAYER_B_LABEL.to_string(),
            directive: DEFAULT_DIRECTIVE.to_string(),
        }
    }
}

impl RenderOptions {
    pub fn label(&self, player: Player) -> &str {
        match player {
            Player::A => &self.player_a_label,
            Player::B => &self.player_b_label,
        }
    }
}

/// Bits of one row as `0`/`1` characters, each followed by a space.
fn spaced_bits(row: &PixelRow, player: Player, direction: Direction) -> String {
    row.iter(direction)
        .map(|pixel| if pixel.is_set_for(player) { "1 " } else { "0 " })
        .collect()
}

/// Annotated picture line for one row.
///
/// # Examples
///
/// ```
/// use pmsprite::orientation::Direction;
/// use pmsprite::renderer::comment_line;
/// use pmsprite::tokenizer::{normalize_line, Line};
///
/// let Line::Row(row) = normalize_line(".1.23..2") else { panic!() };
/// assert_eq!(
///     comment_line(&row, Direction::Forward),
///     "; . 1 . 2 3 . . 2   0 1 0 0 1 0 0 0   0 0 0 1 1 0 0 1 "
/// );
/// ```
pub fn comment_line(row: &PixelRow, direction: Direction) -> String {
    let glyphs: Vec<String> = row.iter(direction).map(|p| p.glyph().to_string()).collect();
    format!(
        "; {}   {}  {}",
        glyphs.join(" "),
        spaced_bits(row, Player::A, direction),
        spaced_bits(row, Player::B, direction)
    )
}

/// Binary literal declaration for one row of one player's bitmap.
pub fn bitmap_line(row: &PixelRow, player: Player, direction: Direction, directive: &str) -> String {
    format!("\t{} %{:08b}", directive, row.bits(player, direction))
}

/// A player's bitmap bytes, in row traversal order.
pub fn player_bitmap(grid: &SpriteGrid, player: Player, traversal: Traversal) -> Vec<u8> {
    grid.iter_rows(traversal.rows).map(|row| row.bits(player, traversal.pixels)).collect()
}

/// Render one complete output block for a traversal.
///
/// The grid is only read; the same grid can be rendered any number of times.
pub fn render_block(grid: &SpriteGrid, traversal: Traversal, options: &RenderOptions) -> String {
    let mut out = String::new();

    out.push('\n');
    out.push_str(PICTURE_TITLE);
    out.push('\n');
    for row in grid.iter_rows(traversal.rows) {
        out.push_str(&comment_line(row, traversal.pixels));
        out.push('\n');
    }

    for player in Player::ALL {
        out.push('\n');
        out.push_str(options.label(player));
        out.push('\n');
        for row in grid.iter_rows(traversal.rows) {
            out.push_str(&bitmap_line(row, player, traversal.pixels, &options.directive));
            out.push('\n');
        }
    }

    out.push('\n');
    out
}
