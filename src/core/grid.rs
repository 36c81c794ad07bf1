//! Integer Grid Coordinates
//!
//! Cell-granular positions for tokens, the pursuer, and board lookups.
//! All movement in the engine happens one whole cell at a time, so positions
//! are plain integer pairs with no sub-cell interpolation.

use std::fmt;
use serde::{Serialize, Deserialize};

use super::direction::Direction;

/// A cell-granular position on the board.
///
/// Coordinates are signed so that stepping off the board edge produces a
/// representable (and rejectable) position instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct GridPos {
    /// Column, increasing eastward.
    pub x: i32,
    /// Row, increasing southward.
    pub y: i32,
}

impl GridPos {
    /// Create a position from coordinates.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one cell away in the given direction.
    ///
    /// Performs no bounds checking; the board decides legality.
    #[inline]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_matches_offsets() {
        let origin = GridPos::new(3, 3);
        assert_eq!(origin.step(Direction::North), GridPos::new(3, 2));
        assert_eq!(origin.step(Direction::East), GridPos::new(4, 3));
        assert_eq!(origin.step(Direction::South), GridPos::new(3, 4));
        assert_eq!(origin.step(Direction::West), GridPos::new(2, 3));
    }

    #[test]
    fn test_step_can_go_negative() {
        assert_eq!(GridPos::new(0, 0).step(Direction::West), GridPos::new(-1, 0));
        assert_eq!(GridPos::new(0, 0).step(Direction::North), GridPos::new(0, -1));
    }
}
