//! Tokens and Movement Legality
//!
//! A token is a movable piece on the board. [`try_move`] is the single place
//! movement legality is decided: bounds, then occupancy, then walls, in that
//! order. Everything else in the engine routes through it.

use serde::{Serialize, Deserialize};

use crate::core::direction::Direction;
use crate::core::grid::GridPos;
use crate::game::board::Board;

/// Ownership tag for draw order and display. No game rule depends on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum TokenColor {
    /// First player's piece art.
    Blue = 0,
    /// Second player's piece art.
    Red = 1,
}

/// A movable game piece in the shared roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Current cell position. Always in bounds while the token is live.
    pub position: GridPos,
    /// Display-only owner color.
    pub color: TokenColor,
}

impl Token {
    /// Create a token at a position.
    pub const fn new(position: GridPos, color: TokenColor) -> Self {
        Self { position, color }
    }
}

/// Attempt to move one roster token a single cell in `direction`.
///
/// Returns `true` and commits the new position iff the move is legal:
/// 1. the target cell is in bounds,
/// 2. no *other* roster token occupies the target (tokens are mutually
///    exclusive occupants, across player boundaries),
/// 3. no wall blocks the exit from the current cell.
///
/// Returns `false` and mutates nothing otherwise. Rejection is a normal
/// outcome, not an error, and repeat attempts are idempotent.
pub fn try_move(
    roster: &mut [Token],
    token_index: usize,
    direction: Direction,
    board: &Board,
) -> bool {
    assert!(
        token_index < roster.len(),
        "move request references roster index {token_index} beyond {} tokens",
        roster.len()
    );

    let current = roster[token_index].position;
    let target = current.step(direction);

    if !board.in_bounds(target) {
        return false;
    }
    if roster
        .iter()
        .enumerate()
        .any(|(i, other)| i != token_index && other.position == target)
    {
        return false;
    }
    if !board.can_exit(current, direction) {
        return false;
    }

    roster[token_index].position = target;
    true
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn roster_at(positions: &[(i32, i32)]) -> Vec<Token> {
        positions
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| {
                let color = if i % 2 == 0 { TokenColor::Blue } else { TokenColor::Red };
                Token::new(GridPos::new(x, y), color)
            })
            .collect()
    }

    #[test]
    fn test_open_move_commits() {
        let board = Board::open(3, 3).unwrap();
        let mut roster = roster_at(&[(1, 1)]);
        assert!(try_move(&mut roster, 0, Direction::East, &board));
        assert_eq!(roster[0].position, GridPos::new(2, 1));
    }

    #[test]
    fn test_bounds_rejection() {
        let board = Board::open(2, 2).unwrap();
        let mut roster = roster_at(&[(0, 0)]);
        assert!(!try_move(&mut roster, 0, Direction::North, &board));
        assert!(!try_move(&mut roster, 0, Direction::West, &board));
        assert_eq!(roster[0].position, GridPos::new(0, 0));
    }

    #[test]
    fn test_wall_rejection_is_idempotent() {
        let mut board = Board::open(2, 1).unwrap();
        board.place_wall(GridPos::new(0, 0), Direction::East).unwrap();
        let mut roster = roster_at(&[(0, 0)]);

        for _ in 0..10 {
            assert!(!try_move(&mut roster, 0, Direction::East, &board));
            assert_eq!(roster[0].position, GridPos::new(0, 0));
        }
    }

    #[test]
    fn test_occupied_cell_rejection() {
        let board = Board::open(3, 1).unwrap();
        let mut roster = roster_at(&[(0, 0), (1, 0)]);
        assert!(!try_move(&mut roster, 0, Direction::East, &board));
        assert_eq!(roster[0].position, GridPos::new(0, 0));

        // The blocker itself is free to move on.
        assert!(try_move(&mut roster, 1, Direction::East, &board));
        assert!(try_move(&mut roster, 0, Direction::East, &board));
    }

    #[test]
    #[should_panic(expected = "roster index")]
    fn test_stale_roster_index_fails_loudly() {
        let board = Board::open(2, 2).unwrap();
        let mut roster = roster_at(&[(0, 0)]);
        try_move(&mut roster, 3, Direction::East, &board);
    }

    proptest! {
        /// Arbitrary move streams never push a token off the board and never
        /// stack two tokens on one cell.
        #[test]
        fn prop_moves_preserve_bounds_and_exclusion(
            moves in prop::collection::vec((0usize..3, 0usize..4), 0..128)
        ) {
            let mut board = Board::open(4, 4).unwrap();
            board.place_wall(GridPos::new(1, 1), Direction::East).unwrap();
            board.place_wall(GridPos::new(2, 2), Direction::North).unwrap();

            let mut roster = roster_at(&[(0, 0), (3, 0), (1, 3)]);
            for (token_index, direction_index) in moves {
                let direction = Direction::ALL[direction_index];
                try_move(&mut roster, token_index, direction, &board);

                for token in &roster {
                    prop_assert!(board.in_bounds(token.position));
                }
                for i in 0..roster.len() {
                    for j in (i + 1)..roster.len() {
                        prop_assert_ne!(roster[i].position, roster[j].position);
                    }
                }
            }
        }
    }
}
