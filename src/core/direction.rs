//! Grid Directions
//!
//! Four-way movement directions with deterministic enumeration order.

use serde::{Serialize, Deserialize};

/// One of the four cardinal movement directions.
///
/// The discriminant doubles as the wall-array index on a cell and fixes the
/// neighbor-enumeration order used everywhere in the engine:
/// North → East → South → West. Pursuit tie-breaking depends on this order,
/// so it must never change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    /// Toward decreasing y.
    North = 0,
    /// Toward increasing x.
    East = 1,
    /// Toward increasing y.
    South = 2,
    /// Toward decreasing x.
    West = 3,
}

impl Direction {
    /// Number of directions.
    pub const COUNT: usize = 4;

    /// All directions in canonical enumeration order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Index into per-cell wall arrays.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Unit coordinate offset for one step in this direction.
    ///
    /// The grid origin is the top-left corner, so North decreases y.
    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// The direction pointing the opposite way.
    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumeration_order() {
        let indices: Vec<usize> = Direction::ALL.iter().map(|d| d.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_offsets() {
        assert_eq!(Direction::North.offset(), (0, -1));
        assert_eq!(Direction::East.offset(), (1, 0));
        assert_eq!(Direction::South.offset(), (0, 1));
        assert_eq!(Direction::West.offset(), (-1, 0));
    }

    #[test]
    fn test_opposite_is_involution() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            let (dx, dy) = direction.offset();
            let (ox, oy) = direction.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }
}
