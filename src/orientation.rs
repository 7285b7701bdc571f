//! Orientation selection
//!
//! Mirroring never touches the stored grid. Each [`Orientation`] maps to a
//! [`Traversal`], a pair of directions the renderer walks rows and pixels in.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors from parsing an orientation letter string such as `"nhv"`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DirectionsError {
    /// No letters given
    #[error("directions must contain at least one of 'n', 'h', 'v'")]
    Empty,
    /// A letter other than n, h or v
    #[error("invalid direction letter '{0}' (expected 'n', 'h' or 'v')")]
    InvalidLetter(char),
}

/// Walk order along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// First element to last
    #[default]
    Forward,
    /// Last element to first
    Reverse,
}

impl Direction {
    /// Effective storage index for the `i`-th step of a walk over `len` items.
    ///
    /// # Examples
    ///
    /// ```
    /// use pmsprite::orientation::Direction;
    ///
    /// assert_eq!(Direction::Forward.index(0, 8), 0);
    /// assert_eq!(Direction::Reverse.index(0, 8), 7);
    /// assert_eq!(Direction::Reverse.index(7, 8), 0);
    /// ```
    pub fn index(self, i: usize, len: usize) -> usize {
        match self {
            Direction::Forward => i,
            Direction::Reverse => len.saturating_sub(1).saturating_sub(i),
        }
    }
}

/// Row and pixel walk orders used by a single render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Traversal {
    pub rows: Direction,
    pub pixels: Direction,
}

/// The four renderable orientations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Normal,
    /// Mirror left/right
    HorizontalFlip,
    /// Mirror top/bottom
    VerticalFlip,
    /// Mirror both axes
    Both,
}

impl Orientation {
    /// Traversal parameters for this orientation.
    pub fn traversal(self) -> Traversal {
        use Direction::{Forward, Reverse};
        match self {
            Orientation::Normal => Traversal { rows: Forward, pixels: Forward },
            Orientation::HorizontalFlip => Traversal { rows: Forward, pixels: Reverse },
            Orientation::VerticalFlip => Traversal { rows: Reverse, pixels: Forward },
            Orientation::Both => Traversal { rows: Reverse, pixels: Reverse },
        }
    }

    /// Short machine-friendly name, used in JSON output.
    pub fn name(self) -> &'static str {
        match self {
            Orientation::Normal => "normal",
            Orientation::HorizontalFlip => "horizontal",
            Orientation::VerticalFlip => "vertical",
            Orientation::Both => "both",
        }
    }

    /// Human-readable description.
    pub fn describe(self) -> &'static str {
        match self {
            Orientation::Normal => "As drawn",
            Orientation::HorizontalFlip => "Flip horizontally (mirror left ↔ right)",
            Orientation::VerticalFlip => "Flip vertically (mirror top ↔ bottom)",
            Orientation::Both => "Flip both axes (rotate 180°)",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of orientation letters requested for a run.
///
/// `h` and `v` together select the single combined [`Orientation::Both`]
/// block rather than one block each. `n` is independent of the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrientationSet {
    normal: bool,
    horizontal: bool,
    vertical: bool,
}

impl OrientationSet {
    pub fn new(normal: bool, horizontal: bool, vertical: bool) -> Self {
        Self { normal, horizontal, vertical }
    }

    /// Orientations to render, in output order: normal, horizontal,
    /// vertical, both.
    ///
    /// # Examples
    ///
    /// ```
    /// use pmsprite::orientation::{Orientation, OrientationSet};
    ///
    /// let set: OrientationSet = "vhn".parse().unwrap();
    /// assert_eq!(set.orientations(), vec![Orientation::Normal, Orientation::Both]);
    /// ```
    pub fn orientations(&self) -> Vec<Orientation> {
        let mut out = Vec::with_capacity(2);
        if self.normal {
            out.push(Orientation::Normal);
        }
        match (self.horizontal, self.vertical) {
            (true, false) => out.push(Orientation::HorizontalFlip),
            (false, true) => out.push(Orientation::VerticalFlip),
            (true, true) => out.push(Orientation::Both),
            (false, false) => {}
        }
        out
    }
}

impl Default for OrientationSet {
    fn default() -> Self {
        Self::new(true, false, false)
    }
}

impl FromStr for OrientationSet {
    type Err = DirectionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DirectionsError::Empty);
        }
        let mut set = Self::new(false, false, false);
        for c in s.chars() {
            match c {
                'n' => set.normal = true,
                'h' => set.horizontal = true,
                'v' => set.vertical = true,
                other => return Err(DirectionsError::InvalidLetter(other)),
            }
        }
        Ok(set)
    }
}

impl fmt::Display for OrientationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.normal {
            f.write_str("n")?;
        }
        if self.horizontal {
            f.write_str("h")?;
        }
        if self.vertical {
            f.write_str("v")?;
        }
        Ok(())
    }
}
