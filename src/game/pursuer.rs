//! Pursuer AI
//!
//! The hostile entity that hunts the nearest token. Disabled until its first
//! `interact` call latches it on; thereafter it re-evaluates pursuit only
//! when the caller-supplied clock passes its cooldown deadline, then takes
//! exactly one step along a breadth-first shortest path.
//!
//! ## Search contract
//!
//! BFS runs over the board's cell-adjacency graph: an edge exists between
//! neighboring cells exactly when no wall blocks the shared boundary,
//! checked on both sides. Discovery order is fixed (North → East → South →
//! West), so shortest-path ties always break the same way. The first goal
//! cell removed from the frontier terminates the search; walking the
//! predecessor chain back yields the single step to take. An unreachable
//! goal set is not an error — the pursuer simply holds its cell this tick.

use std::collections::VecDeque;

use serde::{Serialize, Deserialize};

use crate::core::direction::Direction;
use crate::core::grid::GridPos;
use crate::game::board::Board;
use crate::game::token::Token;

/// What a single `interact` call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PursuitOutcome {
    /// First call: the pursuer switched on without moving.
    Activated,
    /// The cooldown deadline has not passed; nothing happened.
    Waiting,
    /// Pursuit ran but produced no step (no reachable goal, or the pursuer
    /// already shares a cell with a target).
    Held,
    /// The pursuer advanced one cell along the shortest path.
    Moved {
        /// Cell before the step.
        from: GridPos,
        /// Cell after the step.
        to: GridPos,
    },
}

/// The pursuing enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pursuer {
    /// Current cell.
    pub position: GridPos,
    /// Latched on by the first `interact` call; never switches back off.
    pub enabled: bool,
    /// Millisecond timestamp before which pursuit is skipped.
    pub cooldown_deadline_ms: u64,
}

impl Pursuer {
    /// Create a dormant pursuer at a spawn cell.
    pub const fn new(position: GridPos) -> Self {
        Self {
            position,
            enabled: false,
            cooldown_deadline_ms: 0,
        }
    }

    /// Run one pursuit opportunity against the live token roster.
    ///
    /// The first call only enables the pursuer and arms the cooldown.
    /// Subsequent calls are no-ops until `now_ms` reaches the deadline, then
    /// re-arm it and take at most one step toward the nearest token.
    pub fn interact(
        &mut self,
        board: &Board,
        tokens: &[Token],
        now_ms: u64,
        cooldown_ms: u64,
    ) -> PursuitOutcome {
        if !self.enabled {
            self.enabled = true;
            self.cooldown_deadline_ms = now_ms + cooldown_ms;
            return PursuitOutcome::Activated;
        }
        if now_ms < self.cooldown_deadline_ms {
            return PursuitOutcome::Waiting;
        }
        self.cooldown_deadline_ms = now_ms + cooldown_ms;

        let goals: Vec<GridPos> = tokens.iter().map(|token| token.position).collect();
        match first_step_toward(board, self.position, &goals) {
            Some(step) => {
                let from = self.position;
                self.position = step;
                PursuitOutcome::Moved { from, to: step }
            }
            None => PursuitOutcome::Held,
        }
    }
}

/// First step from `start` along a breadth-first shortest path to the
/// nearest goal, or `None` when no goal is reachable or `start` is itself a
/// goal.
fn first_step_toward(board: &Board, start: GridPos, goals: &[GridPos]) -> Option<GridPos> {
    if goals.is_empty() || goals.contains(&start) {
        return None;
    }

    let cell_count = (board.width() as usize) * (board.height() as usize);
    // Dense predecessor map over cell ids; the start self-loops so the
    // chain walk below terminates.
    let mut predecessor: Vec<Option<GridPos>> = vec![None; cell_count];
    predecessor[board.cell_id(start) as usize] = Some(start);

    let mut frontier = VecDeque::new();
    frontier.push_back(start);

    let mut found = None;
    while let Some(current) = frontier.pop_front() {
        if goals.contains(&current) {
            found = Some(current);
            break;
        }
        for direction in Direction::ALL {
            if !board.passage_open(current, direction) {
                continue;
            }
            let neighbor = current.step(direction);
            let id = board.cell_id(neighbor) as usize;
            if predecessor[id].is_none() {
                predecessor[id] = Some(current);
                frontier.push_back(neighbor);
            }
        }
    }

    // Walk predecessors back to the cell adjacent to the start.
    let mut current = found?;
    while let Some(previous) = predecessor[board.cell_id(current) as usize] {
        if previous == start {
            return Some(current);
        }
        if previous == current {
            break;
        }
        current = previous;
    }
    None
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::token::TokenColor;

    const COOLDOWN: u64 = 100;

    fn tokens_at(positions: &[(i32, i32)]) -> Vec<Token> {
        positions
            .iter()
            .map(|&(x, y)| Token::new(GridPos::new(x, y), TokenColor::Blue))
            .collect()
    }

    /// Enable the pursuer and return the clock value of its first live tick.
    fn activate(pursuer: &mut Pursuer, board: &Board, tokens: &[Token]) -> u64 {
        assert_eq!(
            pursuer.interact(board, tokens, 0, COOLDOWN),
            PursuitOutcome::Activated
        );
        COOLDOWN
    }

    #[test]
    fn test_first_interact_enables_without_moving() {
        let board = Board::open(3, 3).unwrap();
        let tokens = tokens_at(&[(1, 0)]);
        let mut pursuer = Pursuer::new(GridPos::new(0, 0));

        let outcome = pursuer.interact(&board, &tokens, 0, COOLDOWN);
        assert_eq!(outcome, PursuitOutcome::Activated);
        assert!(pursuer.enabled);
        assert_eq!(pursuer.position, GridPos::new(0, 0), "activation never moves");
    }

    #[test]
    fn test_cooldown_gates_pursuit() {
        let board = Board::open(3, 3).unwrap();
        let tokens = tokens_at(&[(2, 0)]);
        let mut pursuer = Pursuer::new(GridPos::new(0, 0));
        let now = activate(&mut pursuer, &board, &tokens);

        assert_eq!(
            pursuer.interact(&board, &tokens, now - 1, COOLDOWN),
            PursuitOutcome::Waiting
        );
        assert!(matches!(
            pursuer.interact(&board, &tokens, now, COOLDOWN),
            PursuitOutcome::Moved { .. }
        ));
        // Deadline re-armed by the move.
        assert_eq!(
            pursuer.interact(&board, &tokens, now + COOLDOWN - 1, COOLDOWN),
            PursuitOutcome::Waiting
        );
    }

    #[test]
    fn test_single_step_toward_goal() {
        // Open 3x3, pursuer at (0,0), goal at (2,0): one step lands on (1,0).
        let board = Board::open(3, 3).unwrap();
        let tokens = tokens_at(&[(2, 0)]);
        let mut pursuer = Pursuer::new(GridPos::new(0, 0));
        let now = activate(&mut pursuer, &board, &tokens);

        let outcome = pursuer.interact(&board, &tokens, now, COOLDOWN);
        assert_eq!(
            outcome,
            PursuitOutcome::Moved {
                from: GridPos::new(0, 0),
                to: GridPos::new(1, 0),
            }
        );
        assert_eq!(pursuer.position, GridPos::new(1, 0));
    }

    #[test]
    fn test_tie_breaks_by_enumeration_order() {
        // Goals due North and due East are both one step away; North is
        // discovered first.
        let board = Board::open(3, 3).unwrap();
        let tokens = tokens_at(&[(2, 1), (1, 0)]);
        let mut pursuer = Pursuer::new(GridPos::new(1, 1));
        let now = activate(&mut pursuer, &board, &tokens);

        pursuer.interact(&board, &tokens, now, COOLDOWN);
        assert_eq!(pursuer.position, GridPos::new(1, 0));
    }

    #[test]
    fn test_wall_forces_detour_of_reference_length() {
        // 3x3 with the (0,0)-(1,0) boundary walled: the shortest path from
        // (0,0) to (1,0) runs south, east, north — three steps.
        let mut board = Board::open(3, 3).unwrap();
        board.place_wall(GridPos::new(0, 0), Direction::East).unwrap();
        let tokens = tokens_at(&[(1, 0)]);
        let mut pursuer = Pursuer::new(GridPos::new(0, 0));
        let mut now = activate(&mut pursuer, &board, &tokens);

        let expected = [GridPos::new(0, 1), GridPos::new(1, 1), GridPos::new(1, 0)];
        for waypoint in expected {
            assert!(matches!(
                pursuer.interact(&board, &tokens, now, COOLDOWN),
                PursuitOutcome::Moved { .. }
            ));
            assert_eq!(pursuer.position, waypoint);
            now += COOLDOWN;
        }
    }

    #[test]
    fn test_unreachable_goal_holds_position() {
        // Wall the pursuer into its own cell.
        let mut board = Board::open(2, 1).unwrap();
        board.place_wall(GridPos::new(0, 0), Direction::East).unwrap();
        let tokens = tokens_at(&[(1, 0)]);
        let mut pursuer = Pursuer::new(GridPos::new(0, 0));
        let now = activate(&mut pursuer, &board, &tokens);

        assert_eq!(
            pursuer.interact(&board, &tokens, now, COOLDOWN),
            PursuitOutcome::Held
        );
        assert_eq!(pursuer.position, GridPos::new(0, 0));
    }

    #[test]
    fn test_colocated_goal_holds_position() {
        let board = Board::open(3, 3).unwrap();
        let tokens = tokens_at(&[(1, 1)]);
        let mut pursuer = Pursuer::new(GridPos::new(1, 1));
        let now = activate(&mut pursuer, &board, &tokens);

        assert_eq!(
            pursuer.interact(&board, &tokens, now, COOLDOWN),
            PursuitOutcome::Held
        );
        assert_eq!(pursuer.position, GridPos::new(1, 1));
    }

    #[test]
    fn test_bfs_finds_nearest_of_many_goals() {
        let board = Board::open(5, 5).unwrap();
        // Nearest goal is (1, 2), two steps west of (3, 2).
        let goals = [GridPos::new(1, 2), GridPos::new(3, 0)];
        let step = first_step_toward(&board, GridPos::new(3, 2), &goals);
        // (3,0) is also two steps away; North is enumerated before West, so
        // the northern goal's path is discovered first.
        assert_eq!(step, Some(GridPos::new(3, 1)));
    }
}
