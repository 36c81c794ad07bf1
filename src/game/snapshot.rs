//! Render/Telemetry Snapshots
//!
//! Read-only views of the match for the excluded rendering layer to consume
//! each frame. Snapshots are plain serializable data; the core never calls
//! into rendering.

use serde::{Serialize, Deserialize};

use crate::core::grid::GridPos;
use crate::game::board::Objective;
use crate::game::state::{MatchPhase, MatchState};
use crate::game::token::TokenColor;

/// One cell as the renderer sees it: packed wall code plus objective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    /// Packed wall code (canonical bit order, bit N = Direction N).
    pub walls: u8,
    /// Current objective marker.
    pub objective: Objective,
}

/// Board contents, row-major by cell id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Width in cells.
    pub width: i32,
    /// Height in cells.
    pub height: i32,
    /// Cells in id order.
    pub cells: Vec<CellSnapshot>,
}

/// One token's visible state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSnapshot {
    /// Cell position.
    pub position: GridPos,
    /// Display color.
    pub color: TokenColor,
}

/// The pursuer's visible state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PursuerSnapshot {
    /// Cell position.
    pub position: GridPos,
    /// Whether it has been activated yet.
    pub enabled: bool,
}

/// Everything a frame needs to draw the match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    /// Ticks processed so far.
    pub tick: u64,
    /// Current lifecycle phase.
    pub phase: MatchPhase,
    /// Oxygen as the conventional 0..100 float reading.
    pub oxygen: f32,
    /// Whether the exit is open.
    pub exit_unlocked: bool,
    /// Board contents.
    pub board: BoardSnapshot,
    /// Live tokens in roster order.
    pub tokens: Vec<TokenSnapshot>,
    /// The enemy.
    pub pursuer: PursuerSnapshot,
}

impl MatchState {
    /// Capture a read-only snapshot of the current state.
    pub fn snapshot(&self) -> MatchSnapshot {
        let cells = self
            .board
            .positions()
            .filter_map(|pos| self.board.cell(pos).ok())
            .map(|cell| CellSnapshot {
                walls: cell.wall_code(),
                objective: cell.objective,
            })
            .collect();

        MatchSnapshot {
            tick: self.tick,
            phase: self.phase,
            oxygen: self.oxygen_level(),
            exit_unlocked: self.exit_unlocked,
            board: BoardSnapshot {
                width: self.board.width(),
                height: self.board.height(),
                cells,
            },
            tokens: self
                .tokens
                .iter()
                .map(|token| TokenSnapshot {
                    position: token.position,
                    color: token.color,
                })
                .collect(),
            pursuer: PursuerSnapshot {
                position: self.pursuer.position,
                enabled: self.pursuer.enabled,
            },
        }
    }
}
