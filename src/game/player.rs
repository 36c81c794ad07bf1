//! Player Control
//!
//! A player is a control authority over the shared token roster: it owns an
//! axis restriction and an active-token cursor, and translates requested
//! directions into roster moves. The asymmetric-control mechanic lives here:
//! one player may only move vertically, the other only horizontally,
//! regardless of which token is active.

use serde::{Serialize, Deserialize};

use crate::core::direction::Direction;
use crate::game::board::Board;
use crate::game::token::{self, Token};

/// The pair of opposite directions a player is allowed to use.
///
/// Encoding the restriction as an axis (rather than an open-ended set) makes
/// "exactly two opposite directions" unrepresentable to get wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum MoveAxis {
    /// North and South only.
    Vertical = 0,
    /// East and West only.
    Horizontal = 1,
}

impl MoveAxis {
    /// True iff `direction` lies on this axis.
    #[inline]
    pub fn allows(self, direction: Direction) -> bool {
        match self {
            MoveAxis::Vertical => matches!(direction, Direction::North | Direction::South),
            MoveAxis::Horizontal => matches!(direction, Direction::East | Direction::West),
        }
    }
}

/// One player's control state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Dense player index (0, 1, ...).
    pub index: usize,
    /// Axis restriction, fixed at construction.
    pub axis: MoveAxis,
    /// Cursor into the shared token roster.
    pub active_token: usize,
}

impl Player {
    /// Create a player controlling `active_token` initially.
    pub const fn new(index: usize, axis: MoveAxis, active_token: usize) -> Self {
        Self { index, axis, active_token }
    }

    /// Move the active token one cell, honoring the axis restriction.
    ///
    /// Off-axis requests are ordinary no-ops (`false`), not errors; on-axis
    /// requests delegate to movement legality with every *other* roster
    /// token as an obstacle.
    pub fn move_active(&self, direction: Direction, board: &Board, roster: &mut [Token]) -> bool {
        if !self.axis.allows(direction) {
            return false;
        }
        token::try_move(roster, self.active_token, direction, board)
    }

    /// Advance the active-token cursor, wrapping around the roster.
    ///
    /// Always succeeds; the roster is never empty during an active match.
    pub fn rotate_active(&mut self, roster_len: usize) {
        assert!(roster_len > 0, "rotate on an empty roster");
        self.active_token = (self.active_token + 1) % roster_len;
    }

    /// Re-aim the cursor after a token was removed from the roster.
    ///
    /// Cursors past the removed slot shift down with their token; a cursor
    /// on the removed slot stays put (now naming the next token) unless it
    /// fell off the end, in which case it wraps.
    pub(crate) fn roster_shrunk(&mut self, removed: usize, new_len: usize) {
        if new_len == 0 {
            self.active_token = 0;
            return;
        }
        if self.active_token > removed {
            self.active_token -= 1;
        } else if self.active_token >= new_len {
            self.active_token %= new_len;
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::GridPos;
    use crate::game::token::TokenColor;

    fn two_tokens() -> Vec<Token> {
        vec![
            Token::new(GridPos::new(1, 1), TokenColor::Blue),
            Token::new(GridPos::new(3, 3), TokenColor::Red),
        ]
    }

    #[test]
    fn test_axis_restriction_covers_all_directions() {
        for direction in Direction::ALL {
            let vertical = matches!(direction, Direction::North | Direction::South);
            assert_eq!(MoveAxis::Vertical.allows(direction), vertical);
            assert_eq!(MoveAxis::Horizontal.allows(direction), !vertical);
        }
    }

    #[test]
    fn test_off_axis_move_is_noop() {
        let board = Board::open(5, 5).unwrap();
        let mut roster = two_tokens();
        let player = Player::new(0, MoveAxis::Vertical, 0);

        assert!(!player.move_active(Direction::East, &board, &mut roster));
        assert!(!player.move_active(Direction::West, &board, &mut roster));
        assert_eq!(roster[0].position, GridPos::new(1, 1));

        assert!(player.move_active(Direction::South, &board, &mut roster));
        assert_eq!(roster[0].position, GridPos::new(1, 2));
    }

    #[test]
    fn test_any_player_may_steer_any_token() {
        let board = Board::open(5, 5).unwrap();
        let mut roster = two_tokens();
        // The vertical player rotated onto the second token.
        let player = Player::new(0, MoveAxis::Vertical, 1);

        assert!(player.move_active(Direction::North, &board, &mut roster));
        assert_eq!(roster[1].position, GridPos::new(3, 2));
        assert_eq!(roster[0].position, GridPos::new(1, 1));
    }

    #[test]
    fn test_rotate_cycles_full_roster() {
        let mut player = Player::new(0, MoveAxis::Vertical, 0);
        let roster_len = 3;

        let mut visited = Vec::new();
        for _ in 0..roster_len {
            visited.push(player.active_token);
            player.rotate_active(roster_len);
        }
        assert_eq!(visited, vec![0, 1, 2]);
        assert_eq!(player.active_token, 0, "full cycle returns to index 0");
    }

    #[test]
    fn test_roster_shrunk_adjustments() {
        // Cursor beyond the removed slot shifts down.
        let mut player = Player::new(0, MoveAxis::Vertical, 2);
        player.roster_shrunk(1, 2);
        assert_eq!(player.active_token, 1);

        // Cursor on the removed tail slot wraps.
        let mut player = Player::new(0, MoveAxis::Vertical, 1);
        player.roster_shrunk(1, 1);
        assert_eq!(player.active_token, 0);

        // Cursor before the removed slot is untouched.
        let mut player = Player::new(0, MoveAxis::Vertical, 0);
        player.roster_shrunk(1, 1);
        assert_eq!(player.active_token, 0);
    }
}
